use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Purpose

/// The operation a missing target was needed for.
///
/// Rendered into [`FieldError::NilTarget`] messages.
///
/// ```
/// use df_access::Purpose;
///
/// assert_eq!(Purpose::SetValue.to_string(), "set value");
/// assert_eq!(Purpose::GetField("id".into()).to_string(), "get value from [id] field");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purpose {
    SetValue,
    SetField(String),
    GetField(String),
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetValue => f.write_str("set value"),
            Self::SetField(field) => write!(f, "set value to [{field}] field"),
            Self::GetField(field) => write!(f, "get value from [{field}] field"),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldError

/// An error returned by the field readers and writers.
///
/// Type names are rendered by [`type_name`](crate::type_name) rules, field
/// names are reported after trimming.
///
/// ```
/// use df_access::{FieldError, Nil, set_value};
///
/// let err = set_value(Nil, 1_i32).unwrap_err();
/// assert!(matches!(err, FieldError::NilTarget(_)));
/// assert_eq!(err.to_string(), "a not nil pointer is required to set value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("field name is empty")]
    EmptyName,
    #[error("a not nil pointer is required to {0}")]
    NilTarget(Purpose),
    #[error(
        "unsupported type [{ty}], a structure or a map is required to get value from [{field}] field"
    )]
    UnsupportedContainer {
        ty: Cow<'static, str>,
        field: String,
    },
    #[error("[{ty}.{field}] field is not found")]
    FieldNotFound { ty: Cow<'static, str>, field: String },
    #[error("[{field}] map entry is not found")]
    EntryNotFound { field: String },
    #[error("[{field}] field type [{ty}] is not a string")]
    NotAString { ty: Cow<'static, str>, field: String },
    #[error("[{field}] field type [{found}] is not a [{expected}]")]
    UnexpectedFieldType {
        expected: Cow<'static, str>,
        found: Cow<'static, str>,
        field: String,
    },
    #[error("unsupported type [{ty}], a pointer is required to set value")]
    NotAReference { ty: Cow<'static, str> },
    #[error(
        "unsupported type [{ty}], a pointer to a structure is required to set value to [{field}] field"
    )]
    NotAStructReference {
        ty: Cow<'static, str>,
        field: String,
    },
    #[error("[{ty}.{field}] field is private")]
    FieldPrivate { ty: Cow<'static, str>, field: String },
    #[error("[{ty}.{field}] field is read only")]
    FieldReadOnly { ty: Cow<'static, str>, field: String },
    #[error("value type [{value}] is not assignable to variable type [{target}]")]
    TypeMismatch {
        value: Cow<'static, str>,
        target: Cow<'static, str>,
    },
    #[error("[{ty}.{field}] field cannot be set with current value: {source}")]
    FieldAssign {
        ty: Cow<'static, str>,
        field: String,
        #[source]
        source: Box<FieldError>,
    },
}

impl FieldError {
    #[inline]
    pub(crate) fn type_mismatch(value: &'static str, target: &'static str) -> Self {
        Self::TypeMismatch {
            value: Cow::Borrowed(value),
            target: Cow::Borrowed(target),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
