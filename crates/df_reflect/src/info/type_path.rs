use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// Static access to the printable names of a type.
///
/// Unlike [`core::any::type_name`], these names are fixed by the implementation
/// and do not change between compiler versions. They never start with `::`.
///
/// - [`type_path`]: the fully qualified name, unique per type.
/// - [`type_name`]: the name without module path, may be shared by several types.
/// - [`type_ident`]: the name without module path and generics.
/// - [`module_path`]: the defining module, `None` for primitives.
///
/// Records get an implementation from [`#[derive(Reflect)]`](crate::derive::Reflect):
///
/// ```
/// use df_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect, Default)]
/// #[reflect(type_path = "my_crate::config::Settings")]
/// struct Settings {
///     pub retries: u8,
/// }
///
/// assert_eq!(Settings::type_path(), "my_crate::config::Settings");
/// assert_eq!(Settings::type_name(), "Settings");
/// assert_eq!(Settings::module_path(), Some("my_crate::config"));
/// ```
///
/// Generic implementations cache their composed names in a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Fully qualified path with generics.
    ///
    /// For `Option<Box<u8>>` this is `"core::option::Option<alloc::boxed::Box<u8>>"`.
    fn type_path() -> &'static str;

    /// Short path, generics included.
    ///
    /// For `Option<Box<u8>>` this is `"Option<Box<u8>>"`.
    fn type_name() -> &'static str;

    /// Short name without generics.
    ///
    /// For `Option<Box<u8>>` this is `"Option"`.
    fn type_ident() -> &'static str;

    /// Module the type is defined in, if any.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`], implemented for every `T: TypePath`.
///
/// ```
/// use df_reflect::{Reflect, info::DynamicTypePath};
///
/// let x: &dyn Reflect = &String::new();
/// assert_eq!(x.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

/// Function pointers to one type's [`TypePath`] implementation.
///
/// Names are computed on demand, so building a table costs nothing.
///
/// ```
/// use df_reflect::info::TypePathTable;
///
/// let table = TypePathTable::of::<Vec<u8>>();
/// assert_eq!(table.path(), "alloc::vec::Vec<u8>");
/// assert_eq!(table.ident(), "Vec");
/// ```
#[derive(Clone, Copy)]
pub struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    /// Creates the table of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    /// See [`TypePath::type_path`].
    #[inline(always)]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// See [`TypePath::type_ident`].
    #[inline(always)]
    pub fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    /// See [`TypePath::module_path`].
    #[inline(always)]
    pub fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

impl fmt::Debug for TypePathTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypePathTable")
            .field("type_path", &self.path())
            .field("type_name", &self.name())
            .field("type_ident", &self.ident())
            .field("module_path", &self.module_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type plus its printable names.
///
/// Equality and hashing only look at the [`TypeId`]. This is the type
/// identity the assignability checks of the access layer rely on.
///
/// ```
/// use df_reflect::info::Type;
///
/// let ty = Type::of::<i32>();
/// assert!(ty.is::<i32>());
/// assert_ne!(ty, Type::of::<i64>());
/// assert_eq!(ty.path(), "i32");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// Returns the [`TypePathTable`].
    #[inline(always)]
    pub const fn path_table(&self) -> TypePathTable {
        self.type_path_table
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Re-exports the [`Type`] accessors on an info struct holding a `ty` field.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns `true` if the described type is `T`.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    #[test]
    fn identity_ignores_names() {
        assert_eq!(Type::of::<String>(), Type::of::<String>());
        assert_ne!(Type::of::<u32>(), Type::of::<i32>());
        assert!(Type::of::<BTreeMap<String, u8>>().is::<BTreeMap<String, u8>>());
    }

    #[test]
    fn primitive_has_no_module() {
        assert_eq!(<f64 as TypePath>::module_path(), None);
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
    }
}
