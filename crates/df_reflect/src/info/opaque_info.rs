use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Information about a type whose internals are not exposed.
///
/// Numbers, text, sequences, arrays and function pointers are opaque: they can
/// be compared by type, assigned and zeroed, but not walked into.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Creates a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
