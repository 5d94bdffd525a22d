//! Fetcher implementations for retrieving master descriptors

pub mod http;

pub use http::HttpFetcher;
