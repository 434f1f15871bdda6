pub mod context;
pub mod options;

pub use context::AppContext;
pub use options::{Options, Step};
