use core::iter::FusedIterator;

use crate::Reflect;

/// A record with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). Field order
/// is declaration order, the same order [`StructInfo`](crate::info::StructInfo)
/// reports.
///
/// ```
/// use df_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Default)]
/// struct Pair {
///     pub left: i32,
///     pub right: i32,
/// }
///
/// let mut pair = Pair { left: 1, right: 2 };
/// *pair.field_mut("left").unwrap().downcast_mut::<i32>().unwrap() = 10;
///
/// assert_eq!(pair.left, 10);
/// assert_eq!(pair.name_at(1), Some("right"));
/// assert!(pair.field("middle").is_none());
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;

    /// Iterates `(name, value)` pairs in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;
}

/// An iterator over the fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    record: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new [`StructFieldIter`].
    #[inline(always)]
    pub const fn new(record: &'a dyn Struct) -> Self {
        Self { record, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.record.name_at(self.index)?;
        let value = self.record.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
impl FusedIterator for StructFieldIter<'_> {}
