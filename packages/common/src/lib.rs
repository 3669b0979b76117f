pub mod error;
pub mod observer;
pub mod result;
pub mod stats;
pub mod visitor;

pub use error::*;
pub use observer::*;
pub use result::*;
pub use stats::*;
pub use visitor::*;
