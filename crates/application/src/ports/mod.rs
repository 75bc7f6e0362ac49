pub mod payload_fetcher;

pub use payload_fetcher::{FetchedPayload, PayloadFetcher};
