mod json;
mod query;

pub use json::*;
pub use query::*;
