// BizDir - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: platform, app, or the filesystem.

pub mod award;
pub mod card;
pub mod enrich;
pub mod export;
pub mod founded;
pub mod model;
pub mod normalize;
pub mod query;
