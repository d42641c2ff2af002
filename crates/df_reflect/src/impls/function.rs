use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;

/// Renders `fn(A, B) -> R`, omitting the return for `()`.
fn signature(params: &[&str], ret: &str) -> String {
    let params = params.join(", ");
    if ret == "()" {
        concat(&["fn(", &params, ")"])
    } else {
        concat(&["fn(", &params, ") -> ", ret])
    }
}

/// Implements the reflection traits for a nullable function pointer.
///
/// A function value is opaque: it can only be assigned whole, and its zero
/// value is `None`.
macro_rules! impl_reflect_for_fn {
    ($($arg:ident),*) => {
        impl<$($arg: TypePath,)* R: TypePath> TypePath for Option<fn($($arg),*) -> R> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params: Vec<&str> = Vec::from([$($arg::type_path()),*]);
                    concat(&["core::option::Option<", &signature(&params, R::type_path()), ">"])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let params: Vec<&str> = Vec::from([$($arg::type_name()),*]);
                    concat(&["Option<", &signature(&params, R::type_name()), ">"])
                })
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

        impl<$($arg: TypePath,)* R: TypePath> Typed for Option<fn($($arg),*) -> R> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl<$($arg: TypePath,)* R: TypePath> Reflect for Option<fn($($arg),*) -> R> {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn set_zero(&mut self) {
                *self = None;
            }

            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    Some(_) => f.write_str("Some(fn)"),
                    None => f.write_str("None"),
                }
            }
        }
    };
}

impl_reflect_for_fn!();
impl_reflect_for_fn!(A);
impl_reflect_for_fn!(A, B);
impl_reflect_for_fn!(A, B, C);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::info::TypePath;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn function_paths() {
        assert_eq!(
            <Option<fn(i32, i32) -> i32>>::type_path(),
            "core::option::Option<fn(i32, i32) -> i32>"
        );
        assert_eq!(<Option<fn()>>::type_name(), "Option<fn()>");
        assert_eq!(<Option<fn(bool) -> u8>>::type_name(), "Option<fn(bool) -> u8>");
    }

    #[test]
    fn assign_and_zero() {
        let mut f: Option<fn(i32, i32) -> i32> = None;
        f.set(Box::new(Some(add as fn(i32, i32) -> i32))).unwrap();
        assert_eq!(f.map(|g| g(2, 3)), Some(5));

        f.set_zero();
        assert!(f.is_none());
    }
}
