//! Lock-free cells for targets without `std`.
//!
//! Both are built on [`OnceBox`]. Initializers may race; the first value
//! stored wins and the others are dropped.

use alloc::boxed::Box;
use core::any::TypeId;

use once_cell::race::OnceBox;

// -----------------------------------------------------------------------------
// OnceLock

/// The subset of `std::sync::OnceLock` the type cells use.
pub(super) struct OnceLock<T>(OnceBox<T>);

impl<T> OnceLock<T> {
    #[inline]
    pub(super) const fn new() -> Self {
        Self(OnceBox::new())
    }

    #[inline]
    pub(super) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(|| Box::new(f()))
    }
}

// -----------------------------------------------------------------------------
// TypeIdList

struct Node<T> {
    type_id: TypeId,
    value: T,
    next: OnceBox<Node<T>>,
}

/// An append-only list of values keyed by [`TypeId`].
///
/// Lookup is linear. The list only ever holds the instantiations of one
/// generic type that were actually reflected.
pub(super) struct TypeIdList<T> {
    head: OnceBox<Node<T>>,
}

impl<T> TypeIdList<T> {
    #[inline]
    pub(super) const fn new() -> Self {
        Self {
            head: OnceBox::new(),
        }
    }

    fn get(&self, type_id: TypeId) -> Option<&T> {
        let mut slot = &self.head;
        while let Some(node) = slot.get() {
            if node.type_id == type_id {
                return Some(&node.value);
            }
            slot = &node.next;
        }
        None
    }

    pub(super) fn get_or_insert(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        if let Some(value) = self.get(type_id) {
            return value;
        }

        let mut pending = Some(Box::new(Node {
            type_id,
            value: f(),
            next: OnceBox::new(),
        }));

        // Walk to the tail and append; on a lost race keep walking, the
        // winner may have stored the same type.
        let mut slot = &self.head;
        loop {
            if let Some(node) = slot.get() {
                if node.type_id == type_id {
                    return &node.value;
                }
                slot = &node.next;
            } else if let Some(node) = pending.take()
                && let Err(node) = slot.set(node)
            {
                pending = Some(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::any::TypeId;

    use super::{OnceLock, TypeIdList};

    #[test]
    fn once_lock_keeps_first_value() {
        let cell: OnceLock<u32> = OnceLock::new();
        assert_eq!(*cell.get_or_init(|| 1), 1);
        assert_eq!(*cell.get_or_init(|| 2), 1);
    }

    #[test]
    fn type_id_list() {
        let list: TypeIdList<String> = TypeIdList::new();

        let a = list.get_or_insert(TypeId::of::<u8>(), || String::from("u8"));
        let b = list.get_or_insert(TypeId::of::<i64>(), || String::from("i64"));
        assert_eq!(a, "u8");
        assert_eq!(b, "i64");

        let again = list.get_or_insert(TypeId::of::<u8>(), || String::from("other"));
        assert!(core::ptr::eq(a, again));
        assert_eq!(list.get(TypeId::of::<bool>()), None);
    }
}
