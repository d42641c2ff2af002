//! Built-in reflection implementations and helpers for writing new ones.
//!
//! - [`concat`]: string concatenation for composed type paths.
//! - [`NonGenericTypeInfoCell`]: static [`TypeInfo`] storage for non-generic types.
//! - [`GenericTypeInfoCell`], [`GenericTypePathCell`]: the same for generic types.
//! - `xxx_debug`: implementations of [`Reflect::reflect_debug`] per kind.
//!
//! ## Reflected types
//!
//! - `Opaque`: `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`, `bool`,
//!   `char`, `String`, `&'static str`, `Vec<T>`, `[T; N]`, and
//!   `Option<fn(..) -> R>` with up to three parameters.
//! - `Pointer`: `Option<Box<T>>`.
//! - `Map`: `std::collections::HashMap<String, V>`, `hashbrown::HashMap<String, V>`,
//!   `BTreeMap<String, V>`.
//!
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod function;
mod map;
mod pointer;
mod primitive;
mod sequence;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};

use alloc::string::String;
use core::fmt;

use crate::ops::{Map, Pointer, Struct};

/// Concatenates string slices with a single allocation.
///
/// Mostly used to compose the [`TypePath`](crate::info::TypePath) of generic types.
///
/// ```
/// use df_reflect::impls::concat;
///
/// let s = concat(&["alloc::vec::Vec", "<", "u8", ">"]);
/// assert_eq!(s, "alloc::vec::Vec<u8>");
/// assert_eq!(s.capacity(), 19);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let len: usize = arr.iter().map(|s| s.len()).sum();
    let mut res = String::with_capacity(len);
    arr.iter().for_each(|s| res.push_str(s));
    res
}

/// Debug-formats a record through its reflected fields.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for (name, value) in dyn_struct.iter_fields() {
        debug.field(name, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Debug-formats a map through its reflected entries.
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Debug-formats a pointer as `None` or `Some(pointee)`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(pointee) => f.debug_tuple("Some").field(&pointee).finish(),
        None => f.write_str("None"),
    }
}
