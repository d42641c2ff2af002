//! Static type information.
//!
//! - [`TypePath`] / [`DynamicTypePath`]: stable printable names of a type.
//! - [`Type`]: a [`TypeId`] plus a [`TypePathTable`], the unit of type identity.
//! - [`Typed`] / [`DynamicTyped`]: access to a type's [`TypeInfo`].
//! - [`TypeInfo`]: one of [`StructInfo`], [`MapInfo`], [`PointerInfo`] or [`OpaqueInfo`].
//! - [`NamedField`]: a record field, with its visibility and mutability.
//! - [`ReflectKind`]: the kind discriminator shared by `TypeInfo` and the `ops` casts.
//!
//! [`TypeId`]: core::any::TypeId

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod map_info;
mod opaque_info;
mod pointer_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath, TypePathTable};
pub use typed::{DynamicTyped, Typed};
