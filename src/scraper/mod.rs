mod extractor;
mod fetcher;
mod retry;
mod scraper_error;
mod selectors;

pub use extractor::ListingExtractor;
pub use fetcher::{FetchMode, Fetcher, FetcherConfig, DEFAULT_RENDER_API_URL};
pub use retry::RetryPolicy;
pub use scraper_error::{FetchError, ParseError};
pub use selectors::SelectorMap;
