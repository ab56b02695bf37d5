//! Glob-import this module to bring every combinator method into scope.
//!
//! ```
//! use combinate::prelude::*;
//! ```

pub use crate::and::AndExt;
pub use crate::apply::ApplyExt;
pub use crate::bind::BindExt;
pub use crate::boxed::{BoxedExt, BoxedParser};
pub use crate::input::Input;
pub use crate::label::LabelExt;
pub use crate::map::MapExt;
pub use crate::memo::MemoExt;
pub use crate::not::NotExt;
pub use crate::optional::OptionalExt;
pub use crate::or::OrExt;
pub use crate::parser::Parser;
