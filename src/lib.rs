pub mod analyzers;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod stats;

pub use error::{Error, Result};
