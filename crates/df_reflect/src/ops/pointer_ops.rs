use alloc::boxed::Box;

use crate::Reflect;

/// A nullable single-level pointer, implemented for `Option<Box<T>>`.
///
/// `None` is the null pointer. The pointee type must be `Default` so that a
/// null pointer can be filled with a zero-valued instance.
///
/// ```
/// use df_reflect::ops::Pointer;
///
/// let mut p: Option<Box<String>> = None;
/// assert!(p.is_null());
///
/// p.get_or_alloc().downcast_mut::<String>().unwrap().push_str("hi");
/// assert_eq!(p.as_deref().map(String::as_str), Some("hi"));
///
/// p.clear();
/// assert!(p.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the pointee, `None` if null.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, `None` if null.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Moves the pointee out, `None` if null.
    fn into_pointee(self: Box<Self>) -> Option<Box<dyn Reflect>>;

    /// Returns `true` if the pointer is null.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }

    /// Returns the pointee, first allocating a zero-valued one if null.
    ///
    /// An existing pointee is returned as is.
    fn get_or_alloc(&mut self) -> &mut dyn Reflect;

    /// Makes the pointer null, dropping any pointee.
    fn clear(&mut self);
}
