//! Integration test entry point
//!
//! Every scenario runs against a wiremock server standing in for the news
//! portal and its article pages, with artifacts written to a temp directory.

mod common;
mod crawl_tests;
mod pipeline_tests;
