pub mod dynamic;
pub mod string;

// Re-export all modules
pub use dynamic::*;
pub use string::*;
