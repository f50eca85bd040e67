//! Request handlers.

pub mod health;
pub mod page;
pub mod summarize;

pub use health::*;
pub use page::*;
pub use summarize::*;
