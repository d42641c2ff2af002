use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat, map_debug};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

/// Implements the reflection traits for a string-keyed map type.
macro_rules! impl_reflect_for_map {
    ($ty:ident in $module:literal : $map:ty) => {
        impl<V: TypePath> TypePath for $map {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $module,
                        "::",
                        stringify!($ty),
                        "<alloc::string::String, ",
                        V::type_path(),
                        ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[stringify!($ty), "<String, ", V::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<V: Reflect + Typed> Typed for $map {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, String, V>()))
            }
        }

        impl<V: Reflect + Typed> Reflect for $map {
            impl_reflect_cast_fn!(Map);

            #[inline]
            fn set_zero(&mut self) {
                self.clear();
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                map_debug(self, f)
            }
        }

        impl<V: Reflect + Typed> Map for $map {
            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                Self::get(self, key).map(Reflect::as_reflect)
            }

            #[inline]
            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
                Self::get_mut(self, key).map(Reflect::as_reflect_mut)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
                Box::new(Self::iter(self).map(|(key, value)| (key.as_str(), value.as_reflect())))
            }
        }
    };
}

crate::cfg::std! {
    impl_reflect_for_map!(HashMap in "std::collections" : std::collections::HashMap<String, V>);
}

impl_reflect_for_map!(HashMap in "hashbrown" : hashbrown::HashMap<String, V>);
impl_reflect_for_map!(BTreeMap in "alloc::collections" : BTreeMap<String, V>);

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::TypePath;
    use crate::ops::{Map, ReflectRef};

    #[cfg(feature = "std")]
    #[test]
    fn std_map_path() {
        use std::collections::HashMap;

        assert_eq!(
            <HashMap<String, i32>>::type_path(),
            "std::collections::HashMap<alloc::string::String, i32>"
        );
    }

    #[test]
    fn map_paths() {
        assert_eq!(
            <hashbrown::HashMap<String, bool>>::type_name(),
            "HashMap<String, bool>"
        );
        assert_eq!(<BTreeMap<String, u8>>::module_path(), Some("alloc::collections"));
    }

    #[test]
    fn lookup_by_key() {
        let mut map: hashbrown::HashMap<String, u32> = hashbrown::HashMap::new();
        map.insert("one".into(), 1);

        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        assert_eq!(view.len(), 1);
        assert_eq!(view.get("one").unwrap().downcast_ref::<u32>(), Some(&1));
        assert!(view.get("two").is_none());
    }

    #[test]
    fn zero_and_debug() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), 1_i64);
        map.insert(String::from("b"), 2_i64);
        assert_eq!(format!("{:?}", map.as_reflect()), r#"{"a": 1, "b": 2}"#);

        map.set_zero();
        assert!(Map::is_empty(&map));
    }
}
