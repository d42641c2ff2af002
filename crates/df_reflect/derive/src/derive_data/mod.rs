//! Parsing of the derive input.

mod attributes;
mod reflect_struct;

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use reflect_struct::ReflectStruct;
