#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Macros used for compilation control.
pub(crate) mod cfg {
    /// Keeps the given items only with the `std` feature.
    macro_rules! std {
        ($($item:item)*) => {
            $(
                #[cfg(feature = "std")]
                $item
            )*
        };
    }

    pub(crate) use std;
}

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names `::df_reflect`; the alias lets this crate derive on its own types.
extern crate self as df_reflect;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use df_reflect_derive as derive;
pub use reflection::Reflect;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{ReflectMut, ReflectRef};

    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Inner {
        pub value: i32,
    }

    #[derive(Reflect, Default, Debug)]
    #[reflect(type_path = "demo::Outer")]
    struct Outer {
        pub name: String,
        pub inner: Option<Box<Inner>>,
        #[reflect(readonly)]
        pub id: u64,
        hidden: bool,
    }

    #[derive(Reflect, Default)]
    struct Unit;

    #[derive(Reflect, Default)]
    struct Keyword {
        pub r#type: String,
    }

    #[test]
    fn type_paths() {
        assert_eq!(Inner::type_path(), "df_reflect::tests::Inner");
        assert_eq!(Inner::type_name(), "Inner");
        assert_eq!(Inner::module_path(), Some("df_reflect::tests"));

        assert_eq!(Outer::type_path(), "demo::Outer");
        assert_eq!(Outer::type_name(), "Outer");
        assert_eq!(Outer::module_path(), Some("demo"));
    }

    #[test]
    fn field_flags() {
        let info = Outer::type_info().as_struct().unwrap();
        assert_eq!(info.field_names(), &["name", "inner", "id", "hidden"]);

        let name = info.field("name").unwrap();
        assert!(name.is_public() && name.is_mutable());
        assert!(name.type_is::<String>());

        let id = info.field("id").unwrap();
        assert!(id.is_public() && !id.is_mutable());

        let hidden = info.field("hidden").unwrap();
        assert!(!hidden.is_public());

        let inner = info.field("inner").unwrap();
        assert_eq!(inner.type_info().kind(), ReflectKind::Pointer);
    }

    #[test]
    fn struct_access() {
        let mut outer = Outer {
            name: String::from("o"),
            ..Outer::default()
        };

        let ReflectMut::Struct(record) = outer.reflect_mut() else {
            panic!("expected a struct");
        };
        assert_eq!(record.field_len(), 4);
        assert_eq!(record.name_at(2), Some("id"));
        record
            .field_mut("inner")
            .unwrap()
            .set(Box::new(Some(Box::new(Inner { value: 3 }))))
            .unwrap();

        assert_eq!(outer.inner.as_deref(), Some(&Inner { value: 3 }));

        let ReflectRef::Struct(record) = outer.reflect_ref() else {
            panic!("expected a struct");
        };
        let fields: Vec<&str> = record.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(fields, ["name", "inner", "id", "hidden"]);
        assert!(!outer.hidden);
    }

    #[test]
    fn set_and_zero() {
        let mut outer = Outer {
            name: String::from("o"),
            inner: Some(Box::new(Inner { value: 1 })),
            id: 9,
            hidden: true,
        };

        outer.set_zero();
        assert!(outer.name.is_empty());
        assert!(outer.inner.is_none());
        assert_eq!(outer.id, 0);
        assert!(!outer.hidden);

        let back = outer.set(Box::new(Inner::default())).unwrap_err();
        assert!(back.is::<Inner>());
    }

    #[test]
    fn unit_records() {
        let info = Unit::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 0);
        assert_eq!(Unit.reflect_kind(), ReflectKind::Struct);
    }

    #[test]
    fn raw_identifiers_are_unraw() {
        let info = Keyword::type_info().as_struct().unwrap();
        assert_eq!(info.field_names(), &["type"]);

        let mut keyword = Keyword::default();
        let ReflectMut::Struct(record) = keyword.reflect_mut() else {
            panic!("expected a struct");
        };
        assert!(record.field("r#type").is_none());
        record
            .field_mut("type")
            .unwrap()
            .set(Box::new(String::from("enum")))
            .unwrap();
        assert_eq!(record.name_at(0), Some("type"));
        assert_eq!(keyword.r#type, "enum");
    }

    #[test]
    fn debug_output() {
        let inner: &dyn Reflect = &Inner { value: 5 };
        assert_eq!(format!("{inner:?}"), "Inner { value: 5 }");
    }
}
