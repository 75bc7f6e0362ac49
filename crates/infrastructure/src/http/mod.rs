pub mod fetcher;

pub use fetcher::{HttpFetcher, MAX_HTTP_BODY_SIZE};
