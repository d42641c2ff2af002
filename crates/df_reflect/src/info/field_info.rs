use core::any::{Any, TypeId};

use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// NamedField

/// Information about a record field.
///
/// Besides its name and type, a field carries two independent flags:
///
/// - [`is_public`](Self::is_public): whether the field is visible from outside
///   the record. Derived from the `pub` keyword.
/// - [`is_mutable`](Self::is_mutable): whether the field may be written through
///   reflection. Cleared by `#[reflect(readonly)]`.
///
/// ```
/// use df_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// struct Node {
///     pub label: String,
///     #[reflect(readonly)]
///     pub id: u64,
/// }
///
/// let info = Node::type_info().as_struct().unwrap();
/// let id = info.field("id").unwrap();
///
/// assert!(id.type_is::<u64>());
/// assert!(id.is_public());
/// assert!(!id.is_mutable());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // Built lazily on first access.
    type_info: fn() -> &'static TypeInfo,
    is_public: bool,
    is_mutable: bool,
}

impl NamedField {
    /// Creates a public, mutable field named `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_info: T::type_info,
            is_public: true,
            is_mutable: true,
        }
    }

    /// Sets the visibility flag.
    #[inline]
    pub const fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Sets the mutability flag.
    #[inline]
    pub const fn with_mutable(mut self, is_mutable: bool) -> Self {
        self.is_mutable = is_mutable;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Returns `true` if the declared type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the declared type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns `true` if the field is visible outside its record.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.is_public
    }

    /// Returns `true` if the field may be written through reflection.
    #[inline]
    pub const fn is_mutable(&self) -> bool {
        self.is_mutable
    }
}
