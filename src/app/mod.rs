// BizDir - app/mod.rs
//
// Application layer: data loading and directory state management.
// Dependencies: core, platform.

pub mod loader;
pub mod state;
