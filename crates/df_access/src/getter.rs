use alloc::borrow::Cow;
use alloc::string::String;

use df_reflect::Reflect;
use df_reflect::info::TypePath;
use df_reflect::ops::ReflectRef;

use crate::typename::path_of;
use crate::{DynRef, FieldError, Purpose};

/// Reads the field `field_name` of a record, or the entry `field_name` of a
/// string-keyed map.
///
/// The name is trimmed first. A `&mut` handle, or a pointer passed by value,
/// is dereferenced once before the lookup. Field visibility is not checked.
///
/// # Errors
///
/// - [`FieldError::EmptyName`] if the trimmed name is empty.
/// - [`FieldError::NilTarget`] for [`Nil`](crate::Nil) or a null pointer.
/// - [`FieldError::FieldNotFound`] if a record has no such field.
/// - [`FieldError::EntryNotFound`] if a map has no such key.
/// - [`FieldError::UnsupportedContainer`] for anything else.
///
/// ```
/// use std::collections::HashMap;
/// use df_access::get_field;
///
/// let mut ages: HashMap<String, u32> = HashMap::new();
/// ages.insert("ada".into(), 36);
///
/// let age = get_field(&ages, " ada ").unwrap();
/// assert_eq!(age.downcast_ref::<u32>(), Some(&36));
/// ```
pub fn get_field<'a>(
    container: impl Into<DynRef<'a>>,
    field_name: &str,
) -> Result<&'a dyn Reflect, FieldError> {
    let name = field_name.trim();
    if name.is_empty() {
        return Err(FieldError::EmptyName);
    }

    let container: &'a dyn Reflect = match container.into() {
        DynRef::Nil => return Err(nil_target(name)),
        DynRef::Mut(container) => container,
        DynRef::Value(container) => match container.reflect_ref() {
            ReflectRef::Pointer(ptr) => ptr.pointee().ok_or_else(|| nil_target(name))?,
            _ => container,
        },
    };

    match container.reflect_ref() {
        ReflectRef::Struct(record) => {
            record
                .field(name)
                .ok_or_else(|| FieldError::FieldNotFound {
                    ty: Cow::Borrowed(path_of(container)),
                    field: String::from(name),
                })
        }
        ReflectRef::Map(map) => map.get(name).ok_or_else(|| FieldError::EntryNotFound {
            field: String::from(name),
        }),
        ReflectRef::Pointer(_) | ReflectRef::Opaque(_) => Err(FieldError::UnsupportedContainer {
            ty: Cow::Borrowed(path_of(container)),
            field: String::from(name),
        }),
    }
}

/// Reads a text field or map entry, see [`get_field`].
///
/// Both `String` and `&'static str` count as text.
///
/// # Errors
///
/// Those of [`get_field`], and [`FieldError::NotAString`] if the value is not text.
///
/// ```
/// use df_reflect::derive::Reflect;
/// use df_access::get_field_string;
///
/// #[derive(Reflect, Default)]
/// struct Page {
///     pub title: String,
///     pub size: u32,
/// }
///
/// let page = Page { title: "home".into(), size: 3 };
/// assert_eq!(get_field_string(&page, "title").unwrap(), "home");
///
/// let err = get_field_string(&page, "size").unwrap_err();
/// assert_eq!(err.to_string(), "[size] field type [u32] is not a string");
/// ```
pub fn get_field_string<'a>(
    container: impl Into<DynRef<'a>>,
    field_name: &str,
) -> Result<&'a str, FieldError> {
    let value = get_field(container, field_name)?;

    if let Some(text) = value.downcast_ref::<String>() {
        return Ok(text.as_str());
    }
    if let Some(text) = value.downcast_ref::<&'static str>() {
        return Ok(text);
    }

    Err(FieldError::NotAString {
        ty: Cow::Borrowed(path_of(value)),
        field: String::from(field_name.trim()),
    })
}

/// Reads a field or map entry of type `T`, see [`get_field`].
///
/// # Errors
///
/// Those of [`get_field`], and [`FieldError::UnexpectedFieldType`] if the
/// value is not a `T`.
///
/// ```
/// use std::collections::BTreeMap;
/// use df_access::get_field_as;
///
/// let mut limits: BTreeMap<String, i64> = BTreeMap::new();
/// limits.insert("max".into(), 10);
///
/// assert_eq!(get_field_as::<i64>(&limits, "max"), Ok(&10));
/// assert!(get_field_as::<u8>(&limits, "max").is_err());
/// ```
pub fn get_field_as<'a, T: Reflect + TypePath>(
    container: impl Into<DynRef<'a>>,
    field_name: &str,
) -> Result<&'a T, FieldError> {
    let value = get_field(container, field_name)?;

    value
        .downcast_ref::<T>()
        .ok_or_else(|| FieldError::UnexpectedFieldType {
            expected: Cow::Borrowed(T::type_path()),
            found: Cow::Borrowed(path_of(value)),
            field: String::from(field_name.trim()),
        })
}

#[inline]
fn nil_target(name: &str) -> FieldError {
    FieldError::NilTarget(Purpose::GetField(String::from(name)))
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use std::collections::HashMap;

    use super::{get_field, get_field_as, get_field_string};
    use crate::fixtures::{Record, SubRecord};
    use crate::{FieldError, Nil};

    fn sample() -> Record {
        Record {
            field_string: String::from("hello"),
            field_str: "static",
            field_int: 42,
            private_field: String::from("hidden"),
            ..Record::default()
        }
    }

    #[test]
    fn read_struct_by_value_and_reference() {
        let mut record = sample();

        assert_eq!(get_field_string(&record, "field_string").unwrap(), "hello");
        assert_eq!(get_field_string(&record, "field_str").unwrap(), "static");
        assert_eq!(get_field_string(&mut record, " field_string\t").unwrap(), "hello");
        assert_eq!(get_field_as::<i32>(&record, "field_int"), Ok(&42));
    }

    #[test]
    fn private_fields_are_readable() {
        let record = sample();
        assert_eq!(get_field_string(&record, "private_field").unwrap(), "hidden");
    }

    #[test]
    fn read_through_a_pointer() {
        let boxed: Option<Box<Record>> = Some(Box::new(sample()));
        assert_eq!(get_field_string(&boxed, "field_string").unwrap(), "hello");

        let null: Option<Box<Record>> = None;
        let err = get_field_string(&null, "field_string").unwrap_err();
        assert_eq!(
            err.to_string(),
            "a not nil pointer is required to get value from [field_string] field"
        );
    }

    #[test]
    fn pointer_behind_a_reference_is_not_unwrapped() {
        let mut boxed: Option<Box<SubRecord>> = Some(Box::new(SubRecord::default()));
        let err = get_field(&mut boxed, "field_string").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type [core::option::Option<alloc::boxed::Box<df_access::fixtures::SubRecord>>], \
             a structure or a map is required to get value from [field_string] field"
        );
    }

    #[test]
    fn read_map_entries() {
        let mut map: HashMap<String, String> = HashMap::new();
        map.insert("greeting".into(), "hi".into());

        assert_eq!(get_field_string(&map, "greeting").unwrap(), "hi");
        assert_eq!(get_field_string(&mut map, "greeting").unwrap(), "hi");

        let boxed = Some(Box::new(map.clone()));
        assert_eq!(get_field_string(&boxed, "greeting").unwrap(), "hi");

        let err = get_field_string(&map, "farewell").unwrap_err();
        assert_eq!(err.to_string(), "[farewell] map entry is not found");

        let null: Option<Box<HashMap<String, String>>> = None;
        let err = get_field_string(&null, "greeting").unwrap_err();
        assert!(matches!(err, FieldError::NilTarget(_)));
    }

    #[test]
    fn lookup_errors() {
        let record = sample();

        assert!(matches!(get_field(&record, "  "), Err(FieldError::EmptyName)));
        assert!(matches!(get_field(Nil, ""), Err(FieldError::EmptyName)));
        assert!(matches!(get_field(Nil, "x"), Err(FieldError::NilTarget(_))));

        let err = get_field(&record, "missing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "[df_access::fixtures::Record.missing] field is not found"
        );

        let err = get_field(&5_i32, "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type [i32], a structure or a map is required to get value from [x] field"
        );
    }

    #[test]
    fn type_errors() {
        let record = sample();

        let err = get_field_string(&record, "field_int").unwrap_err();
        assert_eq!(err.to_string(), "[field_int] field type [i32] is not a string");

        let err = get_field_as::<u64>(&record, "field_int").unwrap_err();
        assert_eq!(err.to_string(), "[field_int] field type [i32] is not a [u64]");
    }
}
