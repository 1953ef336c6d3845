pub mod code;
pub mod severity;

pub use code::*;
pub use severity::*;
