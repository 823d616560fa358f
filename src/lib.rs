pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod typings;

pub use config::BuildConfig;
pub use error::{TypingsError, TypingsResult};
pub use typings::{DeclarationArtifact, write_declaration_stub};
