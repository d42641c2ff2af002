use alloc::boxed::Box;

use crate::Reflect;

/// A string-keyed associative container.
///
/// Only maps whose key type is `String` are reflected as `Map`; the access
/// layer looks entries up by field name.
///
/// ```
/// use std::collections::HashMap;
/// use df_reflect::ops::Map;
///
/// let mut scores: HashMap<String, u32> = HashMap::new();
/// scores.insert("alice".into(), 3);
///
/// let map: &dyn Map = &scores;
/// assert_eq!(map.get("alice").unwrap().downcast_ref::<u32>(), Some(&3));
/// assert!(map.get("bob").is_none());
/// ```
pub trait Map: Reflect {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the value stored under `key` mutably.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the map has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entries in the map's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}
