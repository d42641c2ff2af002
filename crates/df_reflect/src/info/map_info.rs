use crate::Reflect;
use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Map;

/// Compile-time information about a string-keyed map.
///
/// ```
/// use std::collections::BTreeMap;
/// use df_reflect::info::Typed;
///
/// let info = <BTreeMap<String, i32>>::type_info().as_map().unwrap();
/// assert!(info.key().is::<String>());
/// assert!(info.value().is::<i32>());
/// ```
#[derive(Clone, Debug)]
pub struct MapInfo {
    ty: Type,
    key: Type,
    value: Type,
    value_info: fn() -> &'static TypeInfo,
}

impl MapInfo {
    impl_type_fn!(ty);

    /// Creates a new [`MapInfo`].
    #[inline]
    pub const fn new<TMap, TKey, TValue>() -> Self
    where
        TMap: Map + TypePath,
        TKey: Reflect + TypePath,
        TValue: Reflect + Typed,
    {
        Self {
            ty: Type::of::<TMap>(),
            key: Type::of::<TKey>(),
            value: Type::of::<TValue>(),
            value_info: TValue::type_info,
        }
    }

    /// Returns the key [`Type`].
    #[inline]
    pub const fn key(&self) -> &Type {
        &self.key
    }

    /// Returns the value [`Type`].
    #[inline]
    pub const fn value(&self) -> &Type {
        &self.value
    }

    /// Returns the [`TypeInfo`] of the value type.
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }
}
