use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectOwned, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`df_reflect`].
///
/// This trait enables dynamic access and modification of data without compile-time
/// type information. A `&dyn Reflect` is the "runtime value" the field-access
/// layer works on: it knows its own [type path](crate::info::TypePath), its
/// [`TypeInfo`](crate::info::TypeInfo), its [kind](ReflectKind), and how to overwrite itself.
///
/// # Type Identification
///
/// While `Reflect` supports [`Any`], note that [`Any::type_id`] on `Box<dyn Reflect>`
/// returns the container's type ID, not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use df_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Type Casting
///
/// Use [`reflect_ref`], [`reflect_mut`] and [`reflect_owned`] to cast to the
/// kind-specific subtraits ([`Struct`], [`Map`], [`Pointer`]).
///
/// Use `downcast_ref`, `downcast_mut`, `downcast` and `take` for concrete types:
///
/// ```rust
/// # use df_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
/// let y = x.downcast_ref::<i32>().unwrap();
/// assert_eq!(*y, 10);
/// ```
///
/// # Implementation
///
/// Records should use [the derive macro](crate::derive::Reflect). Manual
/// implementations can lean on the same shape the built-in impls use:
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn set_zero(&mut self) {
///     *self = Default::default();
/// }
/// ```
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_owned`]: Reflect::reflect_owned
/// [`Struct`]: crate::ops::Struct
/// [`Map`]: crate::ops::Map
/// [`Pointer`]: crate::ops::Pointer
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this boxed type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a fully-reflected value.
    ///
    /// ```
    /// use df_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// `Box<dyn Reflect>::type_id` returns the [`TypeId`] of the box itself,
    /// which is prone to errors, so prefer this method.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Performs a type-checked move assignment of a reflected value to this value.
    ///
    /// The types must be identical. On mismatch the value is handed back untouched.
    ///
    /// ```
    /// # use df_reflect::Reflect;
    /// let mut x = 1_i64;
    /// assert!(x.set(Box::new(5_i64)).is_ok());
    /// assert_eq!(x, 5);
    ///
    /// let back = x.set(Box::new(5_i32)).unwrap_err();
    /// assert!(back.is::<i32>());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Overwrites this value with the zero value of its type.
    ///
    /// Numbers become `0`, text becomes empty, collections become empty,
    /// pointers become null, and records are zeroed field by field.
    fn set_zero(&mut self);

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns an owned enumeration of ["kinds"](ReflectOwned) of type.
    fn reflect_owned(self: Box<Self>) -> ReflectOwned;

    /// Debug formatter for the value.
    ///
    /// Records and maps are printed through their fields and entries,
    /// other types write `"Opaque(type_path)"` unless they override it.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use df_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            any.downcast::<T>()
                .map_err(|_| unreachable!("type is already checked"))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// # use df_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the common methods `set`, `reflect_kind` and the casts.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }

        #[inline]
        fn reflect_owned(self: ::alloc::boxed::Box<Self>) -> $crate::ops::ReflectOwned {
            $crate::ops::ReflectOwned::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
