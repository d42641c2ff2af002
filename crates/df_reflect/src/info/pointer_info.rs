use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// Compile-time information about a nullable single-level pointer.
///
/// The pointee is the type a non-null pointer refers to; it is also the type
/// that gets allocated when a null pointer is filled.
///
/// ```
/// use df_reflect::info::Typed;
///
/// let info = <Option<Box<u16>>>::type_info().as_pointer().unwrap();
/// assert!(info.pointee().is::<u16>());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee: Type,
    pointee_info: fn() -> &'static TypeInfo,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Creates a new [`PointerInfo`].
    #[inline]
    pub const fn new<TPtr: Pointer + TypePath, T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            pointee: Type::of::<T>(),
            pointee_info: T::type_info,
        }
    }

    /// Returns the pointee [`Type`].
    #[inline]
    pub const fn pointee(&self) -> &Type {
        &self.pointee
    }

    /// Returns the [`TypeInfo`] of the pointee.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }
}
