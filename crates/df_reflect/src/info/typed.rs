use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// Static access to the [`TypeInfo`] of a type.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by every
/// built-in reflected type. The info is built once and cached for the life of
/// the process.
///
/// ```
/// use df_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     pub owner: String,
///     balance: i64,
/// }
///
/// let info = Account::type_info().as_struct().unwrap();
/// assert_eq!(info.field_len(), 2);
/// assert!(info.field("owner").unwrap().is_public());
/// assert!(!info.field("balance").unwrap().is_public());
/// ```
///
/// Manual implementations store the info in a
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell), or in a
/// [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell) for generic types.
pub trait Typed: TypePath {
    /// Returns the compile-time type information of `Self`.
    ///
    /// Use [`DynamicTyped`] when only a `dyn Reflect` is at hand.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    ///
    /// ```
    /// use df_reflect::{Reflect, info::{DynamicTyped, ReflectKind}};
    ///
    /// let x: Box<dyn Reflect> = Box::new(Some(Box::new(3_u8)));
    /// assert_eq!(x.reflect_type_info().kind(), ReflectKind::Pointer);
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
