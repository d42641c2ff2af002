//! Items the code generated by `#[derive(Reflect)]` refers to.
//!
//! The caller may not have `alloc` in scope, so the derive output reaches
//! these through the resolved `df_reflect` path instead.

pub mod macro_utils {
    pub use ::alloc::boxed::Box;
    pub use ::core::fmt::{Formatter, Result as FmtResult};
    pub use ::core::option::Option::{self, None, Some};
    pub use ::core::result::Result::{self, Err, Ok};
}
