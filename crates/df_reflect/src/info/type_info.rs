use core::{error, fmt};

use crate::info::{MapInfo, OpaqueInfo, PointerInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The "kind" of a reflected type.
///
/// Each kind except `Opaque` has a matching subtrait in [`ops`](crate::ops)
/// that exposes its structure.
///
/// - `Struct`: a record with named fields.
/// - `Map`: a string-keyed associative container.
/// - `Pointer`: a nullable single-level reference, `Option<Box<T>>`.
/// - `Opaque`: anything whose internals are not exposed (numbers, text,
///   sequences, arrays, function pointers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    Map,
    Pointer,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a [`TypeInfo`] is not of the expected [`ReflectKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information about a reflected type.
///
/// Obtained through [`Typed::type_info`] when the type is known statically,
/// or [`DynamicTyped::reflect_type_info`] on a `dyn Reflect`.
///
/// ```
/// use df_reflect::info::{Typed, ReflectKind};
///
/// let info = <Option<Box<String>>>::type_info();
/// assert_eq!(info.kind(), ReflectKind::Pointer);
///
/// let pointer = info.as_pointer().unwrap();
/// assert!(pointer.pointee().is::<String>());
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Map(MapInfo),
    Pointer(PointerInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the inner [`", stringify!($info), "`], or a [`ReflectKindError`].")]
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_map: Map => MapInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the [`Type`] this info describes.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Map(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of this info.
    ///
    /// ```
    /// use df_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Opaque);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
