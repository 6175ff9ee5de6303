//! AtCoder page fetching, row extraction and per-problem reduction

pub mod client;
pub mod extractor;
pub mod reducer;

pub use client::{AtCoderClient, SubmissionSource, submissions_url};
pub use extractor::parse_submissions;
pub use reducer::summarize;
