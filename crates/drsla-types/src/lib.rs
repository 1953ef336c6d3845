pub mod diagnostic;
pub mod domain;
pub mod error;
pub mod snapshot;
mod util;

pub use diagnostic::*;
pub use domain::*;
pub use error::{Error, Result};
pub use snapshot::*;
pub use util::*;
