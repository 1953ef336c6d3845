pub mod group;
pub mod job;
pub mod target;
pub mod vm;

pub use group::*;
pub use job::*;
pub use target::*;
pub use vm::*;
