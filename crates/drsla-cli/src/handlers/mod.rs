mod context;

pub mod analyze;
pub mod codes;
pub mod duration;
pub mod rpo;

pub use context::HandlerContext;
