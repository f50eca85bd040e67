//! Request and response types.

pub mod requests;
pub mod responses;

pub use requests::*;
pub use responses::*;
