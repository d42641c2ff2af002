#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Macros used for compilation control.
pub(crate) mod cfg {
    /// Keeps the given items only with the `std` feature.
    macro_rules! std {
        ($($item:item)*) => {
            $(
                #[cfg(feature = "std")]
                $item
            )*
        };
    }

    /// Expands its content only for debug builds with the `debug` feature.
    macro_rules! debug {
        ($($tt:tt)*) => {
            #[cfg(all(feature = "debug", debug_assertions))]
            {
                $($tt)*
            }
        };
    }

    pub(crate) use {debug, std};
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod adapter;
mod error;
mod getter;
mod handle;
mod setter;
mod typename;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use adapter::{Adaptation, assign, find_match};
pub use error::{FieldError, Purpose};
pub use getter::{get_field, get_field_as, get_field_string};
pub use handle::{DynRef, IntoSource, Nil, Source};
pub use setter::{set_field, set_value};
pub use typename::{INVALID_NAME, NIL_NAME, name_of, type_name};
