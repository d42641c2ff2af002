use alloc::boxed::Box;

use df_reflect::Reflect;
use df_reflect::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Nil

/// The untyped nil.
///
/// As a target it is never writable. As a value it resets the destination
/// to its zero value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nil;

// -----------------------------------------------------------------------------
// DynRef

/// A caller-supplied value seen by the field readers and writers.
///
/// - [`DynRef::Nil`]: the untyped nil.
/// - [`DynRef::Value`]: a value passed by copy, readable but not writable.
/// - [`DynRef::Mut`]: a reference to a writable location.
///
/// Usually built implicitly through [`From`]:
///
/// ```
/// use df_access::{DynRef, Nil};
///
/// let mut x = 3_i32;
/// assert!(matches!(DynRef::from(&x), DynRef::Value(_)));
/// assert!(matches!(DynRef::from(&mut x), DynRef::Mut(_)));
/// assert!(DynRef::from(Nil).is_nil());
/// ```
pub enum DynRef<'a> {
    Nil,
    Value(&'a dyn Reflect),
    Mut(&'a mut dyn Reflect),
}

impl<'a> DynRef<'a> {
    /// Returns `true` for the untyped nil.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the referenced value, `None` for [`DynRef::Nil`].
    #[inline]
    pub fn as_reflect(&self) -> Option<&dyn Reflect> {
        match self {
            Self::Nil => None,
            Self::Value(value) => Some(*value),
            Self::Mut(value) => Some(&**value),
        }
    }
}

impl From<Nil> for DynRef<'_> {
    #[inline]
    fn from(_: Nil) -> Self {
        Self::Nil
    }
}

impl<'a, T: Reflect> From<&'a T> for DynRef<'a> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::Value(value)
    }
}

impl<'a, T: Reflect> From<&'a mut T> for DynRef<'a> {
    #[inline]
    fn from(value: &'a mut T) -> Self {
        Self::Mut(value)
    }
}

impl<'a> From<&'a dyn Reflect> for DynRef<'a> {
    #[inline]
    fn from(value: &'a dyn Reflect) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a mut dyn Reflect> for DynRef<'a> {
    #[inline]
    fn from(value: &'a mut dyn Reflect) -> Self {
        Self::Mut(value)
    }
}

/// Returns `true` if `value` is a pointer holding nothing.
#[inline]
pub(crate) fn is_nil_pointer(value: &dyn Reflect) -> bool {
    matches!(value.reflect_ref(), ReflectRef::Pointer(ptr) if ptr.is_null())
}

// -----------------------------------------------------------------------------
// Source

/// A value offered to a writer.
///
/// A typed nil pointer such as `None::<Box<T>>` is a [`Source::Typed`] value,
/// unlike [`Source::Nil`].
#[derive(Debug)]
pub enum Source {
    Nil,
    Typed(Box<dyn Reflect>),
}

impl Source {
    /// Wraps an already boxed reflected value.
    ///
    /// ```
    /// use df_access::Source;
    /// use df_reflect::Reflect;
    ///
    /// let source = Source::from_boxed(7_u8.into_boxed_reflect());
    /// assert!(!source.is_nil());
    /// ```
    #[inline]
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        Self::Typed(value)
    }

    /// Returns `true` for the untyped nil.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

/// Conversion into a writer [`Source`].
///
/// Implemented for every [`Reflect`] type, for [`Nil`] and for [`Source`].
pub trait IntoSource {
    fn into_source(self) -> Source;
}

impl<T: Reflect> IntoSource for T {
    #[inline]
    fn into_source(self) -> Source {
        Source::Typed(Box::new(self))
    }
}

impl IntoSource for Nil {
    #[inline]
    fn into_source(self) -> Source {
        Source::Nil
    }
}

impl IntoSource for Source {
    #[inline(always)]
    fn into_source(self) -> Source {
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::{DynRef, IntoSource, Nil, Source, is_nil_pointer};

    #[test]
    fn into_source() {
        assert!(Nil.into_source().is_nil());

        let Source::Typed(value) = 5_i32.into_source() else {
            panic!("expected a typed source");
        };
        assert!(value.is::<i32>());

        let Source::Typed(value) = None::<Box<String>>.into_source() else {
            panic!("a typed nil pointer is still typed");
        };
        assert!(value.is::<Option<Box<String>>>());
    }

    #[test]
    fn nil_pointer_detection() {
        let null: Option<Box<i32>> = None;
        let full: Option<Box<i32>> = Some(Box::new(1));

        assert!(is_nil_pointer(&null));
        assert!(!is_nil_pointer(&full));
        assert!(!is_nil_pointer(&0_i32));
    }

    #[test]
    fn as_reflect() {
        let mut x = 9_u16;
        assert!(DynRef::Nil.as_reflect().is_none());

        let handle = DynRef::from(&mut x);
        assert_eq!(handle.as_reflect().unwrap().downcast_ref::<u16>(), Some(&9));
    }
}
