//! Records shared by the unit tests.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use std::collections::HashMap;

use df_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
pub(crate) struct SubRecord {
    pub field_string: String,
}

impl SubRecord {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            field_string: String::from(text),
        }
    }
}

#[derive(Reflect, Default, Debug)]
pub(crate) struct Record {
    pub field_bool: bool,
    pub field_int: i32,
    pub field_int64: i64,
    pub field_uint8: u8,
    pub field_float32: f32,
    pub field_float64: f64,
    pub field_string: String,
    pub field_str: &'static str,
    pub field_array: [i32; 3],
    pub field_slice: Vec<i32>,
    pub field_map: HashMap<String, i32>,
    pub field_func: Option<fn(i32, i32) -> i32>,
    pub field_struct: SubRecord,
    pub field_ptr: Option<Box<SubRecord>>,
    pub field_int_ptr: Option<Box<i32>>,
    #[reflect(readonly)]
    pub field_read_only: u32,
    pub(crate) private_field: String,
}

pub(crate) fn add(a: i32, b: i32) -> i32 {
    a + b
}
