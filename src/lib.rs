pub mod cs;
pub mod error;

pub use cs::{dynamic, string};
pub use error::{Error, Result};
