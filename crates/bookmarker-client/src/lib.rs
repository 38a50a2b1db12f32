pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod sanitizer;

pub use config::ClientConfig;
pub use extractor::ReadabilityExtractor;
pub use fetcher::ReqwestFetcher;
pub use sanitizer::{ALLOWED_TAGS, AmmoniaSanitizer};

use bookmarker_core::{AppError, ArticleParser};

/// The production pipeline: reqwest + dom_smoothie + ammonia.
pub type DefaultArticleParser =
    ArticleParser<ReqwestFetcher, ReadabilityExtractor, AmmoniaSanitizer>;

/// Build the production pipeline from a [`ClientConfig`].
pub fn build_parser(config: &ClientConfig) -> Result<DefaultArticleParser, AppError> {
    let fetcher = ReqwestFetcher::from_config(config)?;
    let sanitizer = if config.drop_script_content {
        AmmoniaSanitizer::dropping_script_content()
    } else {
        AmmoniaSanitizer::new()
    };

    Ok(ArticleParser::new(
        fetcher,
        ReadabilityExtractor::new().with_max_elements(config.max_elements_to_parse),
        sanitizer,
    ))
}
