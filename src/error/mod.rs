/// Centralized error handling for vue3-typings
pub mod typings;

pub use typings::{TypingsError, TypingsResult};
