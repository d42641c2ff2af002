use alloc::boxed::Box;

use df_reflect::Reflect;
use df_reflect::ops::{ReflectMut, ReflectOwned, ReflectRef};

use crate::typename::path_of;
use crate::{FieldError, Source, cfg};

// -----------------------------------------------------------------------------
// Adaptation

/// How a value is written into a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adaptation {
    /// Same type, moved in as is.
    Direct,
    /// The value is a non-null pointer to the destination type; its pointee
    /// is moved in.
    UnwrapSource,
    /// The destination is a pointer to the value type; the value is moved
    /// into the pointee, allocating it if null.
    WrapTarget,
}

/// Finds the first rule under which `value` can be written into `target`.
///
/// Rules are tried in order: [`Direct`], [`UnwrapSource`], [`WrapTarget`].
/// Only one level of pointer is ever added or removed.
///
/// ```
/// use df_access::{Adaptation, find_match};
///
/// let target: Option<Box<u8>> = None;
///
/// assert_eq!(find_match(&0_u8, &1_u8), Some(Adaptation::Direct));
/// assert_eq!(find_match(&0_u8, &Some(Box::new(1_u8))), Some(Adaptation::UnwrapSource));
/// assert_eq!(find_match(&target, &1_u8), Some(Adaptation::WrapTarget));
/// assert_eq!(find_match(&0_u8, &1_i32), None);
/// ```
///
/// [`Direct`]: Adaptation::Direct
/// [`UnwrapSource`]: Adaptation::UnwrapSource
/// [`WrapTarget`]: Adaptation::WrapTarget
pub fn find_match(target: &dyn Reflect, value: &dyn Reflect) -> Option<Adaptation> {
    if value.ty_id() == target.ty_id() {
        return Some(Adaptation::Direct);
    }

    let target_info = target.reflect_type_info();

    match value.reflect_ref() {
        ReflectRef::Pointer(ptr) => {
            if target_info.as_pointer().is_ok() {
                return None;
            }
            let pointee = ptr.pointee()?;
            (pointee.ty_id() == target.ty_id()).then_some(Adaptation::UnwrapSource)
        }
        _ => {
            let info = target_info.as_pointer().ok()?;
            (info.pointee().id() == value.ty_id()).then_some(Adaptation::WrapTarget)
        }
    }
}

/// Writes `value` into `target`.
///
/// [`Source::Nil`] resets `target` to its zero value. Any other value is
/// written under the rule [`find_match`] selects. On error `target` is left
/// untouched.
///
/// # Errors
///
/// [`FieldError::TypeMismatch`] if no rule applies.
///
/// ```
/// use df_access::{Source, assign};
///
/// let mut slot: Option<Box<String>> = None;
///
/// assign(&mut slot, Source::from_boxed(Box::new(String::from("x")))).unwrap();
/// assert_eq!(slot.as_deref().map(String::as_str), Some("x"));
///
/// assign(&mut slot, Source::Nil).unwrap();
/// assert!(slot.is_none());
/// ```
pub fn assign(target: &mut dyn Reflect, value: Source) -> Result<(), FieldError> {
    let value = match value {
        Source::Typed(value) => value,
        Source::Nil => {
            cfg::debug! {
                log::trace!("reset [{}] to its zero value", path_of(target));
            }
            target.set_zero();
            return Ok(());
        }
    };

    let value_path = path_of(&*value);
    let target_path = path_of(target);
    let mismatch = || FieldError::type_mismatch(value_path, target_path);

    match find_match(target, &*value).ok_or_else(mismatch)? {
        Adaptation::Direct => target.set(value).map_err(|_| mismatch()),
        Adaptation::UnwrapSource => {
            cfg::debug! {
                log::trace!("unwrap [{value_path}] to assign to [{target_path}]");
            }
            let pointee = into_pointee(value).ok_or_else(mismatch)?;
            target.set(pointee).map_err(|_| mismatch())
        }
        Adaptation::WrapTarget => {
            let ReflectMut::Pointer(ptr) = target.reflect_mut() else {
                return Err(mismatch());
            };
            let was_null = ptr.is_null();
            cfg::debug! {
                if was_null {
                    log::trace!("allocate a [{value_path}] behind [{target_path}]");
                }
            }
            if ptr.get_or_alloc().set(value).is_err() {
                if was_null {
                    ptr.clear();
                }
                return Err(mismatch());
            }
            Ok(())
        }
    }
}

#[inline]
fn into_pointee(value: Box<dyn Reflect>) -> Option<Box<dyn Reflect>> {
    match value.reflect_owned() {
        ReflectOwned::Pointer(ptr) => ptr.into_pointee(),
        _ => None,
    }
}
