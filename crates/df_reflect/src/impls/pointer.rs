use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, pointer_debug};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;

// `Option<Box<T>>` is the nullable pointer: `None` is null, `Some` owns the pointee.

impl<T: TypePath> TypePath for Option<Box<T>> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["core::option::Option<alloc::boxed::Box<", T::type_path(), ">>"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<Box<", T::type_name(), ">>"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed + Default> Typed for Option<Box<T>> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>()))
    }
}

impl<T: Reflect + Typed + Default> Reflect for Option<Box<T>> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn set_zero(&mut self) {
        *self = None;
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pointer_debug(self, f)
    }
}

impl<T: Reflect + Typed + Default> Pointer for Option<Box<T>> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_deref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_deref_mut().map(Reflect::as_reflect_mut)
    }

    #[inline]
    fn into_pointee(self: Box<Self>) -> Option<Box<dyn Reflect>> {
        (*self).map(Reflect::into_reflect)
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn get_or_alloc(&mut self) -> &mut dyn Reflect {
        let pointee: &mut T = self.get_or_insert_with(Box::default);
        pointee
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}
