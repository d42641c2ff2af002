use alloc::boxed::Box;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Map, Pointer, Struct};

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ReflectKind`] of the wrapped value.
        pub fn kind(&self) -> ReflectKind {
            match self {
                Self::Struct(_) => ReflectKind::Struct,
                Self::Map(_) => ReflectKind::Map,
                Self::Pointer(_) => ReflectKind::Pointer,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

/// An immutable kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_ref`].
///
/// ```
/// use df_reflect::{Reflect, ops::ReflectRef};
///
/// let p: Option<Box<i32>> = Some(Box::new(4));
/// let ReflectRef::Pointer(ptr) = p.reflect_ref() else { unreachable!() };
/// assert!(!ptr.is_null());
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Opaque(&'a dyn Reflect),
}

impl ReflectRef<'_> {
    impl_kind_fn!();
}

/// A mutable kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Opaque(&'a mut dyn Reflect),
}

impl ReflectMut<'_> {
    impl_kind_fn!();
}

/// An owned kind-specific view of a reflected value.
///
/// Returned by [`Reflect::reflect_owned`].
pub enum ReflectOwned {
    Struct(Box<dyn Struct>),
    Map(Box<dyn Map>),
    Pointer(Box<dyn Pointer>),
    Opaque(Box<dyn Reflect>),
}

impl ReflectOwned {
    impl_kind_fn!();
}
