//! # Combinate - Parser Combinator Library
//!
//! Small parsers combine into larger ones: sequencing ([`and`](and::AndExt::and),
//! [`then`](and::AndExt::then), [`apply`](apply::ApplyExt::apply),
//! [`bind`](bind::BindExt::bind)), ordered choice with full backtracking
//! ([`or`](or::OrExt::or)), and repetition ([`many`](many::many)).
//!
//! Parsers are generic over an [`Input`] cursor, so the same grammar runs over
//! text ([`StrCursor`]) and byte buffers ([`ByteCursor`]).
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **No hidden consumption**: A failed parser never consumes input
//! - **Stack safe repetition**: `many` and friends are loops, not recursion
//!
//! ```
//! use combinate::ascii::{integer, skip_spaces};
//! use combinate::char::char;
//! use combinate::many::many;
//! use combinate::not::end_of_input;
//! use combinate::prelude::*;
//! use combinate::{StrCursor, run};
//!
//! let item = integer().skip(skip_spaces());
//! let list = char('[')
//!     .skip(skip_spaces())
//!     .then(many(item))
//!     .skip(char(']'))
//!     .skip(end_of_input());
//!
//! let (numbers, _) = run(&list, StrCursor::new("[1 -2 30]")).unwrap();
//! assert_eq!(numbers, vec![1, -2, 30]);
//! ```

pub mod and;
pub mod apply;
pub mod ascii;
pub mod atomic;
pub mod bind;
pub mod boxed;
pub mod char;
pub mod cursors;
pub mod error;
pub mod input;
pub mod label;
pub mod lazy;
pub mod many;
pub mod map;
pub mod memo;
pub mod not;
pub mod optional;
pub mod or;
pub mod parser;
pub mod prelude;
pub mod pure;
pub mod satisfy;
pub mod string;
pub mod take;

pub use atomic::Atomic;
pub use boxed::BoxedParser;
pub use cursors::{AtomicCursor, ByteCursor, StrCursor};
pub use error::{Location, ParseError, ParseResult};
pub use input::Input;
pub use parser::{Parser, run};
