// BizDir - lib.rs
//
// Library entry point, exposing the enrichment and query engine for the
// CLI, integration tests, and any other presentation layer.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
