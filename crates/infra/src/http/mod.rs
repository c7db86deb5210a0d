pub mod client;
pub mod collect;
pub mod envelope;
pub mod pagination;
pub mod rate_limit;

pub use client::{HttpClient, HttpClientBuilder, RetryPolicy};
pub use collect::Collector;
pub use pagination::{PageContext, PageCursor};
