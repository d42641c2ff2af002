use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

// Sequences are opaque: they are assigned and zeroed as a whole, never indexed.

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + Typed> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed> Reflect for Vec<T> {
    impl_reflect_cast_fn!(Opaque);

    #[inline]
    fn set_zero(&mut self) {
        self.clear();
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

impl<T: TypePath, const N: usize> TypePath for [T; N] {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_path(), "; ", &N.to_string(), "]"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_name(), "; ", &N.to_string(), "]"]))
    }

    fn type_ident() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["[", T::type_ident(), "; ", &N.to_string(), "]"]))
    }
}

impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Opaque);

    fn set_zero(&mut self) {
        self.iter_mut().for_each(Reflect::set_zero);
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}
