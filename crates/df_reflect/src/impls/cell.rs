//! Static storage for type information.
//!
//! A `static` inside a generic function is shared by every instantiation, so
//! generic types key their cached values by [`TypeId`]. Cached values are
//! never dropped and live for the rest of the process.
//!
//! With `std` the cells are a [`OnceLock`] and a [`RwLock`]ed hash map. Without
//! it they fall back to lock-free [`OnceBox`] storage.
//!
//! [`OnceLock`]: std::sync::OnceLock
//! [`RwLock`]: std::sync::RwLock
//! [`OnceBox`]: once_cell::race::OnceBox

use alloc::string::String;
use core::any::{Any, TypeId};

use crate::info::TypeInfo;

crate::cfg::std! {
    use alloc::boxed::Box;
    use std::sync::{OnceLock, PoisonError, RwLock};

    use foldhash::fast::FixedState;
    use hashbrown::HashMap;
}

#[cfg(any(test, not(feature = "std")))]
mod fallback;

#[cfg(not(feature = "std"))]
use fallback::{OnceLock, TypeIdList};

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;

    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Static storage for one non-generic type's information.
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Static [`TypeInfo`] storage for a non-generic type.
///
/// ```ignore
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, initializing it with `f` on first call.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Static storage for generic types' information, keyed by [`TypeId`].
pub struct GenericTypeCell<T: TypedProperty>(
    #[cfg(feature = "std")] RwLock<HashMap<TypeId, &'static T, FixedState>>,
    #[cfg(not(feature = "std"))] TypeIdList<T>,
);

/// Static [`TypeInfo`] storage for a generic type.
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Static type path storage for a generic type.
///
/// ```
/// use df_reflect::impls::{GenericTypePathCell, concat};
/// use df_reflect::info::TypePath;
///
/// struct Wrapper<T>(T);
///
/// impl<T: TypePath> TypePath for Wrapper<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["demo::Wrapper<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Wrapper<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Wrapper" }
/// }
///
/// assert_eq!(<Wrapper<u8>>::type_path(), "demo::Wrapper<u8>");
/// assert_eq!(<Wrapper<bool>>::type_name(), "Wrapper<bool>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Returns the value stored for type `G`, inserting `f()` on first call.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }
}

crate::cfg::std! {
    impl<T: TypedProperty> GenericTypeCell<T> {
        /// Creates an empty cell.
        #[inline]
        pub const fn new() -> Self {
            Self(RwLock::new(HashMap::with_hasher(FixedState::with_seed(0))))
        }

        #[inline(never)]
        fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
            match self.get_by_type_id(type_id) {
                Some(info) => info,
                None => self.insert_by_type_id(type_id, f()),
            }
        }

        #[inline(never)]
        fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
            self.0
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&type_id)
                .copied()
        }

        #[inline(never)]
        fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
            // Another thread may have raced us here; keep whichever value landed first.
            *self
                .0
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .entry(type_id)
                .or_insert_with(|| Box::leak(Box::new(value)))
        }
    }
}

#[cfg(not(feature = "std"))]
impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(TypeIdList::new())
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_insert(type_id, f)
    }
}
