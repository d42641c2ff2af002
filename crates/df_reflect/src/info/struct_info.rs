use alloc::boxed::Box;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// Compile-time information about a record.
///
/// Fields are kept in declaration order and can also be looked up by name.
///
/// ```
/// use df_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// struct Point {
///     pub x: f32,
///     pub y: f32,
/// }
///
/// let info = Point::type_info().as_struct().unwrap();
/// assert_eq!(info.field_names(), &["x", "y"]);
/// assert_eq!(info.index_of("y"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: HashMap<&'static str, NamedField, FixedState>,
    field_names: Box<[&'static str]>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Creates a new [`StructInfo`], fields in the given order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let field_names = fields.iter().map(NamedField::name).collect();
        let fields = fields.iter().map(|f| (f.name(), f.clone())).collect();

        Self {
            ty: Type::of::<T>(),
            fields,
            field_names,
        }
    }

    /// Returns the field named `name`.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(name)
    }

    /// Returns the field at `index` in declaration order.
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(self.field_names.get(index)?)
    }

    /// Iterates the fields in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        // Every name in `field_names` is a key of `fields`.
        self.field_names.iter().map(|name| &self.fields[*name])
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the declaration index of `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_names.iter().position(|s| *s == name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.field_names.len()
    }
}
