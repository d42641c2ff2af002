use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;

use df_reflect::ops::ReflectMut;

use crate::handle::is_nil_pointer;
use crate::typename::path_of;
use crate::{DynRef, FieldError, IntoSource, Purpose, assign, type_name};

/// Writes `value` into the location `target` refers to.
///
/// `target` must be a `&mut` reference. The value is adapted as described
/// in [`find_match`](crate::find_match); [`Nil`](crate::Nil) resets the
/// location to its zero value.
///
/// # Errors
///
/// - [`FieldError::NilTarget`] for [`Nil`](crate::Nil) or a null pointer.
/// - [`FieldError::NotAReference`] for any other value passed by copy.
/// - [`FieldError::TypeMismatch`] if the value cannot be adapted.
///
/// ```
/// use df_access::{Nil, set_value};
///
/// let mut count = 1_u32;
/// set_value(&mut count, 5_u32).unwrap();
/// assert_eq!(count, 5);
///
/// set_value(&mut count, Nil).unwrap();
/// assert_eq!(count, 0);
///
/// assert!(set_value(&count, 5_u32).is_err());
/// ```
pub fn set_value<'a>(
    target: impl Into<DynRef<'a>>,
    value: impl IntoSource,
) -> Result<(), FieldError> {
    match target.into() {
        DynRef::Nil => Err(FieldError::NilTarget(Purpose::SetValue)),
        DynRef::Value(target) if is_nil_pointer(target) => {
            Err(FieldError::NilTarget(Purpose::SetValue))
        }
        DynRef::Value(target) => Err(FieldError::NotAReference {
            ty: Cow::Borrowed(path_of(target)),
        }),
        DynRef::Mut(target) => assign(target, value.into_source()),
    }
}

/// Writes `value` into the field `field_name` of the record `target` refers to.
///
/// `target` must be a `&mut` reference to a record. The name is trimmed
/// first, and the field must be public and not read-only. The value is
/// adapted as in [`set_value`].
///
/// # Errors
///
/// Checked in order:
///
/// 1. [`FieldError::NilTarget`] for [`Nil`](crate::Nil) or a null pointer.
/// 2. [`FieldError::NotAStructReference`] unless `target` is a `&mut` record.
/// 3. [`FieldError::EmptyName`] if the trimmed name is empty.
/// 4. [`FieldError::FieldNotFound`] if the record has no such field.
/// 5. [`FieldError::FieldPrivate`] or [`FieldError::FieldReadOnly`].
/// 6. [`FieldError::FieldAssign`] wrapping the [`FieldError::TypeMismatch`].
///
/// ```
/// use df_reflect::derive::Reflect;
/// use df_access::set_field;
///
/// #[derive(Reflect, Default)]
/// struct Config {
///     pub port: u16,
///     secret: String,
/// }
///
/// let mut config = Config::default();
/// set_field(&mut config, "port", 8080_u16).unwrap();
/// assert_eq!(config.port, 8080);
///
/// let err = set_field(&mut config, "secret", String::new()).unwrap_err();
/// assert!(err.to_string().ends_with("field is private"));
/// # let _ = config.secret;
/// ```
pub fn set_field<'a>(
    target: impl Into<DynRef<'a>>,
    field_name: &str,
    value: impl IntoSource,
) -> Result<(), FieldError> {
    let name = field_name.trim();

    let target = match target.into() {
        DynRef::Nil => return Err(nil_target(name)),
        DynRef::Value(target) if is_nil_pointer(target) => return Err(nil_target(name)),
        handle @ DynRef::Value(_) => return Err(not_a_struct_reference(type_name(handle), name)),
        DynRef::Mut(target) => target,
    };

    let target_path = path_of(target);
    let ReflectMut::Struct(record) = target.reflect_mut() else {
        let ty = Cow::Owned(format!("&mut {target_path}"));
        return Err(not_a_struct_reference(ty, name));
    };

    if name.is_empty() {
        return Err(FieldError::EmptyName);
    }

    let ty = Cow::Borrowed(target_path);
    let field = String::from(name);

    let info = record
        .reflect_type_info()
        .as_struct()
        .ok()
        .and_then(|info| info.field(name));
    let Some(info) = info else {
        return Err(FieldError::FieldNotFound { ty, field });
    };
    if !info.is_public() {
        return Err(FieldError::FieldPrivate { ty, field });
    }
    if !info.is_mutable() {
        return Err(FieldError::FieldReadOnly { ty, field });
    }

    let Some(slot) = record.field_mut(name) else {
        return Err(FieldError::FieldNotFound { ty, field });
    };

    assign(slot, value.into_source()).map_err(|err| FieldError::FieldAssign {
        ty,
        field,
        source: Box::new(err),
    })
}

#[inline]
fn nil_target(name: &str) -> FieldError {
    FieldError::NilTarget(Purpose::SetField(String::from(name)))
}

#[inline]
fn not_a_struct_reference(ty: Cow<'static, str>, name: &str) -> FieldError {
    FieldError::NotAStructReference {
        ty,
        field: String::from(name),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::error::Error;
    use std::collections::{BTreeMap, HashMap};

    use df_reflect::derive::Reflect;

    use super::{set_field, set_value};
    use crate::fixtures::{Record, SubRecord, add};
    use crate::{FieldError, Nil, get_field};

    // -------------------------------------------------------------------------
    // set_value

    #[test]
    fn set_value_scalars() {
        let mut flag = false;
        set_value(&mut flag, true).unwrap();
        assert!(flag);

        let mut int = 0_i32;
        set_value(&mut int, 15_i32).unwrap();
        assert_eq!(int, 15);

        let mut wide = 0_i64;
        set_value(&mut wide, -3_i64).unwrap();
        assert_eq!(wide, -3);

        let mut float = 0.0_f64;
        set_value(&mut float, 2.5_f64).unwrap();
        assert_eq!(float, 2.5);

        let mut text = String::new();
        set_value(&mut text, String::from("set")).unwrap();
        assert_eq!(text, "set");

        let mut borrowed: &'static str = "";
        set_value(&mut borrowed, "static").unwrap();
        assert_eq!(borrowed, "static");
    }

    #[test]
    fn set_value_collections() {
        let mut array = [0_i32; 3];
        set_value(&mut array, [1_i32, 2, 3]).unwrap();
        assert_eq!(array, [1, 2, 3]);

        let mut list = vec![9_i32];
        set_value(&mut list, vec![1_i32, 2]).unwrap();
        assert_eq!(list, vec![1, 2]);
        set_value(&mut list, Vec::<i32>::new()).unwrap();
        assert!(list.is_empty());

        let mut map: HashMap<String, i32> = HashMap::new();
        let mut other = HashMap::new();
        other.insert(String::from("k"), 1_i32);
        set_value(&mut map, other.clone()).unwrap();
        assert_eq!(map, other);

        let mut ordered: BTreeMap<String, bool> = BTreeMap::new();
        let mut other = BTreeMap::new();
        other.insert(String::from("on"), true);
        set_value(&mut ordered, other.clone()).unwrap();
        assert_eq!(ordered, other);
    }

    #[test]
    fn set_value_records_and_pointers() {
        let mut sub = SubRecord::default();
        set_value(&mut sub, SubRecord::new("one")).unwrap();
        assert_eq!(sub.field_string, "one");

        let mut slot: Option<Box<SubRecord>> = None;
        set_value(&mut slot, SubRecord::new("two")).unwrap();
        assert_eq!(slot.as_deref(), Some(&SubRecord::new("two")));

        set_value(&mut sub, Some(Box::new(SubRecord::new("three")))).unwrap();
        assert_eq!(sub.field_string, "three");

        let mut func: Option<fn(i32, i32) -> i32> = None;
        set_value(&mut func, Some(add as fn(i32, i32) -> i32)).unwrap();
        assert_eq!(func.map(|f| f(2, 3)), Some(5));
    }

    #[test]
    fn set_value_nil_resets() {
        let mut text = String::from("x");
        set_value(&mut text, Nil).unwrap();
        assert!(text.is_empty());

        let mut slot = Some(Box::new(4_i32));
        set_value(&mut slot, Nil).unwrap();
        assert!(slot.is_none());
    }

    #[test]
    fn set_value_errors() {
        let err = set_value(Nil, 1_i32).unwrap_err();
        assert_eq!(err.to_string(), "a not nil pointer is required to set value");

        let null: Option<Box<i32>> = None;
        let err = set_value(&null, 1_i32).unwrap_err();
        assert!(matches!(err, FieldError::NilTarget(_)));

        let int = 1_i32;
        let err = set_value(&int, 2_i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type [i32], a pointer is required to set value"
        );

        let mut int = 1_i32;
        let err = set_value(&mut int, String::from("2")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "value type [alloc::string::String] is not assignable to variable type [i32]"
        );
        assert_eq!(int, 1);
    }

    // -------------------------------------------------------------------------
    // set_field

    #[test]
    fn set_field_every_kind() {
        let mut record = Record::default();

        set_field(&mut record, "field_bool", true).unwrap();
        set_field(&mut record, "field_int", 7_i32).unwrap();
        set_field(&mut record, "field_int64", 8_i64).unwrap();
        set_field(&mut record, "field_uint8", 9_u8).unwrap();
        set_field(&mut record, "field_float32", 1.5_f32).unwrap();
        set_field(&mut record, "field_float64", 2.5_f64).unwrap();
        set_field(&mut record, "field_string", String::from("s")).unwrap();
        set_field(&mut record, "field_str", "t").unwrap();
        set_field(&mut record, "field_array", [1_i32, 2, 3]).unwrap();
        set_field(&mut record, "field_slice", vec![4_i32, 5]).unwrap();
        set_field(&mut record, "field_map", HashMap::from([(String::from("a"), 1_i32)])).unwrap();
        set_field(&mut record, "field_func", Some(add as fn(i32, i32) -> i32)).unwrap();
        set_field(&mut record, "field_struct", SubRecord::new("sub")).unwrap();
        set_field(&mut record, "field_ptr", Some(Box::new(SubRecord::new("ptr")))).unwrap();
        set_field(&mut record, " field_int_ptr ", Some(Box::new(6_i32))).unwrap();

        assert!(record.field_bool);
        assert_eq!(record.field_int, 7);
        assert_eq!(record.field_int64, 8);
        assert_eq!(record.field_uint8, 9);
        assert_eq!(record.field_float32, 1.5);
        assert_eq!(record.field_float64, 2.5);
        assert_eq!(record.field_string, "s");
        assert_eq!(record.field_str, "t");
        assert_eq!(record.field_array, [1, 2, 3]);
        assert_eq!(record.field_slice, vec![4, 5]);
        assert_eq!(record.field_map.get("a"), Some(&1));
        assert_eq!(record.field_func.map(|f| f(1, 1)), Some(2));
        assert_eq!(record.field_struct, SubRecord::new("sub"));
        assert_eq!(record.field_ptr.as_deref(), Some(&SubRecord::new("ptr")));
        assert_eq!(record.field_int_ptr.as_deref(), Some(&6));
    }

    #[test]
    fn set_field_adapts_pointers() {
        let mut record = Record::default();

        // Unwrap a pointer into a value field.
        set_field(&mut record, "field_struct", Some(Box::new(SubRecord::new("u")))).unwrap();
        assert_eq!(record.field_struct.field_string, "u");

        // Wrap a value into a null pointer field.
        set_field(&mut record, "field_ptr", SubRecord::new("w")).unwrap();
        assert_eq!(record.field_ptr.as_deref(), Some(&SubRecord::new("w")));

        set_field(&mut record, "field_int_ptr", 3_i32).unwrap();
        assert_eq!(record.field_int_ptr.as_deref(), Some(&3));

        // A typed null pointer is written as is.
        set_field(&mut record, "field_ptr", None::<Box<SubRecord>>).unwrap();
        assert!(record.field_ptr.is_none());
    }

    #[test]
    fn set_field_nil_resets_every_kind() {
        let mut record = Record {
            field_bool: true,
            field_int: 1,
            field_int64: 2,
            field_uint8: 3,
            field_float32: 4.0,
            field_float64: 5.0,
            field_string: String::from("six"),
            field_str: "seven",
            field_array: [8, 8, 8],
            field_slice: vec![9],
            field_map: HashMap::from([(String::from("ten"), 10)]),
            field_func: Some(add),
            field_struct: SubRecord::new("eleven"),
            field_ptr: Some(Box::new(SubRecord::new("twelve"))),
            field_int_ptr: Some(Box::new(13)),
            field_read_only: 14,
            private_field: String::from("fifteen"),
        };

        for name in [
            "field_bool",
            "field_int",
            "field_int64",
            "field_uint8",
            "field_float32",
            "field_float64",
            "field_string",
            "field_str",
            "field_array",
            "field_slice",
            "field_map",
            "field_func",
            "field_struct",
            "field_ptr",
            "field_int_ptr",
        ] {
            set_field(&mut record, name, Nil).unwrap();
        }

        assert!(!record.field_bool);
        assert_eq!(record.field_int, 0);
        assert_eq!(record.field_int64, 0);
        assert_eq!(record.field_uint8, 0);
        assert_eq!(record.field_float32, 0.0);
        assert_eq!(record.field_float64, 0.0);
        assert_eq!(record.field_string, "");
        assert_eq!(record.field_str, "");
        assert_eq!(record.field_array, [0, 0, 0]);
        assert!(record.field_slice.is_empty());
        assert!(record.field_map.is_empty());
        assert!(record.field_func.is_none());
        assert_eq!(record.field_struct, SubRecord::default());
        assert!(record.field_ptr.is_none());
        assert!(record.field_int_ptr.is_none());

        assert_eq!(record.field_read_only, 14);
        assert_eq!(record.private_field, "fifteen");
    }

    #[test]
    fn set_field_access_errors() {
        let mut record = Record::default();

        let err = set_field(&mut record, "private_field", String::from("p")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[df_access::fixtures::Record.private_field] field is private"
        );

        let err = set_field(&mut record, "field_read_only", 1_u32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[df_access::fixtures::Record.field_read_only] field is read only"
        );

        let err = set_field(&mut record, "missing", 1_i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[df_access::fixtures::Record.missing] field is not found"
        );

        let err = set_field(&mut record, " ", 1_i32).unwrap_err();
        assert_eq!(err, FieldError::EmptyName);

        assert!(record.private_field.is_empty());
        assert_eq!(record.field_read_only, 0);
    }

    #[test]
    fn set_field_target_errors() {
        let err = set_field(Nil, "field_int", 1_i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "a not nil pointer is required to set value to [field_int] field"
        );

        let null: Option<Box<Record>> = None;
        let err = set_field(&null, "field_int", 1_i32).unwrap_err();
        assert!(matches!(err, FieldError::NilTarget(_)));

        let record = Record::default();
        let err = set_field(&record, "field_int", 1_i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type [df_access::fixtures::Record], \
             a pointer to a structure is required to set value to [field_int] field"
        );

        let mut map: HashMap<String, i32> = HashMap::new();
        let err = set_field(&mut map, "k", 1_i32).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported type [&mut std::collections::HashMap<alloc::string::String, i32>], \
             a pointer to a structure is required to set value to [k] field"
        );
        assert!(map.is_empty());

        // The target is checked before the name.
        let err = set_field(&mut 0_i32, "", 1_i32).unwrap_err();
        assert!(matches!(err, FieldError::NotAStructReference { .. }));
    }

    #[test]
    fn set_field_type_mismatch() {
        let mut record = Record::default();

        let err = set_field(&mut record, "field_int", "str").unwrap_err();
        assert_eq!(
            err.to_string(),
            "[df_access::fixtures::Record.field_int] field cannot be set with current value: \
             value type [&str] is not assignable to variable type [i32]"
        );
        assert!(matches!(err, FieldError::FieldAssign { .. }));

        let source = err.source().unwrap().to_string();
        assert_eq!(source, "value type [&str] is not assignable to variable type [i32]");

        let err = set_field(&mut record, "field_int", None::<Box<i32>>).unwrap_err();
        assert!(matches!(err, FieldError::FieldAssign { .. }));
        assert_eq!(record.field_int, 0);
    }

    #[derive(Reflect, Default)]
    struct Token {
        pub r#type: String,
    }

    #[test]
    fn set_field_raw_identifier() {
        let mut token = Token::default();

        set_field(&mut token, "type", String::from("ident")).unwrap();
        assert_eq!(token.r#type, "ident");

        let err = get_field(&token, "r#type").unwrap_err();
        assert!(matches!(err, FieldError::FieldNotFound { .. }));
    }
}
