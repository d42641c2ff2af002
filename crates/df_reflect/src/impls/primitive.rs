use alloc::string::String;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;
use crate::Reflect;

/// Implements `Typed` and `Reflect` for a non-generic opaque type whose zero
/// value is its `Default`.
macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn set_zero(&mut self) {
                *self = <$ty as Default>::default();
            }

            #[inline]
            fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

/// Implements `TypePath` for types named by a bare keyword.
macro_rules! impl_native_type_path {
    ($($ty:ident),* $(,)?) => {$(
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }
        }
    )*};
}

impl_native_type_path!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

impl_reflect_opaque!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char,
);

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }

    #[inline]
    fn type_name() -> &'static str {
        "()"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "()"
    }
}

impl TypePath for String {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::string::String"
    }

    #[inline]
    fn type_name() -> &'static str {
        "String"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "String"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::string")
    }
}

impl TypePath for &'static str {
    #[inline]
    fn type_path() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_name() -> &'static str {
        "&str"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "str"
    }
}

impl_reflect_opaque!(String, &'static str);
