pub mod error;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod traits;
pub mod util;

#[cfg(test)]
mod testutil;

pub use error::AppError;
pub use models::{
    ArticleResult, ParseError, PipelineOutcome, PlainText, PlainTextEntry, RawExtraction,
};
pub use normalize::normalize;
pub use pipeline::ArticleParser;
pub use traits::{Extractor, Fetcher, Sanitizer};
