//! Browser Bindings
//!
//! Wrappers over the browser APIs the page needs, organized by concern.

mod clock;
mod file_reader;
mod storage;

pub use clock::*;
pub use file_reader::*;
pub use storage::*;
