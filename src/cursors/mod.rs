pub mod atomic;
pub mod byte;
pub mod text;

pub use atomic::AtomicCursor;
pub use byte::ByteCursor;
pub use text::StrCursor;
