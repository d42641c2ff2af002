//! Kind-specific access to reflected values.
//!
//! - [`Struct`]: records, fields by name or by declaration index.
//! - [`Map`]: string-keyed maps, entries by key.
//! - [`Pointer`]: nullable single-level pointers, the pointee and its allocation.
//!
//! [`ReflectRef`], [`ReflectMut`] and [`ReflectOwned`] cast a `dyn Reflect`
//! into one of these by its [kind](crate::info::ReflectKind).

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod map_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectOwned, ReflectRef};

pub use map_ops::Map;
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
