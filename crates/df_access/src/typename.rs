use alloc::borrow::Cow;
use alloc::format;

use df_reflect::Reflect;
use df_reflect::info::Type;

use crate::DynRef;

/// The name rendered for an absent value or type.
pub const NIL_NAME: &str = "<nil>";

/// The name rendered for a type descriptor without a printable path.
pub const INVALID_NAME: &str = "<invalid>";

/// Renders a type descriptor.
///
/// ```
/// use df_access::name_of;
/// use df_reflect::info::Type;
///
/// assert_eq!(name_of(None), "<nil>");
/// assert_eq!(name_of(Some(&Type::of::<Vec<i32>>())), "alloc::vec::Vec<i32>");
/// ```
pub fn name_of(ty: Option<&Type>) -> &'static str {
    match ty {
        None => NIL_NAME,
        Some(ty) => match ty.path() {
            "" => INVALID_NAME,
            path => path,
        },
    }
}

/// Returns the path of the dynamic type of `value`.
#[inline]
pub(crate) fn path_of(value: &dyn Reflect) -> &'static str {
    name_of(Some(value.reflect_type_info().ty()))
}

/// Renders the dynamic type of a value.
///
/// A `&mut` reference is named as the reference type.
///
/// ```
/// use df_access::{Nil, type_name};
///
/// let mut text = String::new();
///
/// assert_eq!(type_name(Nil), "<nil>");
/// assert_eq!(type_name(&5_i32), "i32");
/// assert_eq!(type_name(&mut text), "&mut alloc::string::String");
/// ```
pub fn type_name<'a>(value: impl Into<DynRef<'a>>) -> Cow<'static, str> {
    match value.into() {
        DynRef::Nil => Cow::Borrowed(NIL_NAME),
        DynRef::Value(value) => Cow::Borrowed(path_of(value)),
        DynRef::Mut(value) => Cow::Owned(format!("&mut {}", path_of(value))),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::collections::HashMap;

    use df_reflect::info::{Type, TypePath};

    use super::{INVALID_NAME, name_of, type_name};
    use crate::Nil;
    use crate::fixtures::{Record, SubRecord};

    #[test]
    fn type_name_table() {
        let mut record = Record::default();
        let mut int = 0_i32;
        let func: Option<fn(i32, i32) -> i32> = None;

        assert_eq!(type_name(Nil), "<nil>");
        assert_eq!(type_name(&true), "bool");
        assert_eq!(type_name(&1_i32), "i32");
        assert_eq!(type_name(&1.5_f64), "f64");
        assert_eq!(type_name(&"hi"), "&str");
        assert_eq!(type_name(&String::new()), "alloc::string::String");
        assert_eq!(type_name(&[1_i32, 2]), "[i32; 2]");
        assert_eq!(type_name(&Vec::<u8>::new()), "alloc::vec::Vec<u8>");
        assert_eq!(
            type_name(&HashMap::<String, i32>::new()),
            "std::collections::HashMap<alloc::string::String, i32>"
        );
        assert_eq!(
            type_name(&BTreeMap::<String, bool>::new()),
            "alloc::collections::BTreeMap<alloc::string::String, bool>"
        );
        assert_eq!(type_name(&func), "core::option::Option<fn(i32, i32) -> i32>");
        assert_eq!(type_name(&SubRecord::default()), "df_access::fixtures::SubRecord");
        assert_eq!(
            type_name(&None::<Box<SubRecord>>),
            "core::option::Option<alloc::boxed::Box<df_access::fixtures::SubRecord>>"
        );
        assert_eq!(type_name(&mut int), "&mut i32");
        assert_eq!(type_name(&mut record), "&mut df_access::fixtures::Record");
    }

    #[test]
    fn descriptor_names() {
        assert_eq!(name_of(None), "<nil>");
        assert_eq!(name_of(Some(&Type::of::<u64>())), "u64");
        assert_eq!(name_of(Some(&Type::of::<Record>())), "df_access::fixtures::Record");
    }

    struct Blank;

    impl TypePath for Blank {
        fn type_path() -> &'static str {
            ""
        }

        fn type_name() -> &'static str {
            ""
        }

        fn type_ident() -> &'static str {
            ""
        }
    }

    #[test]
    fn empty_path_is_invalid() {
        assert_eq!(name_of(Some(&Type::of::<Blank>())), INVALID_NAME);
        assert_eq!(INVALID_NAME, "<invalid>");
    }
}
