pub mod build;
pub mod constants;

pub use build::{BuildConfig, CssOptions};
