//! Declaration stub emitted after the library build.
//!
//! The upstream build leaves `dist/@polygonjs/` behind but no typings for the
//! CommonJS bundle. This module writes a one-line ambient module declaration
//! so consumers' type-checkers accept `import ... from "@polygonjs/vue3"`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::constants;
use crate::error::{TypingsError, TypingsResult};

/// The fixed declaration file and where it lives under a working directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclarationArtifact;

impl DeclarationArtifact {
    /// File content, including the trailing newline
    pub fn payload(&self) -> String {
        format!("declare module \"{}\";\n", constants::MODULE_SPECIFIER)
    }

    /// `dist/@polygonjs/vue3.common.d.ts`
    pub fn relative_path(&self) -> PathBuf {
        Path::new(constants::DIST_DIR)
            .join(constants::NAMESPACE)
            .join(constants::DECLARATION_FILE)
    }

    pub fn target_in(&self, working_directory: &Path) -> PathBuf {
        working_directory.join(self.relative_path())
    }

    /// Write the payload under `working_directory`, replacing any previous
    /// content. The parent directory must already exist.
    pub fn write_to(&self, working_directory: &Path) -> TypingsResult<PathBuf> {
        let target = self.target_in(working_directory);
        debug!("Writing declaration stub: {:?}", target);

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&target)
            .map_err(|e| TypingsError::io(&target, e))?;
        file.write_all(self.payload().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| TypingsError::io(&target, e))?;

        info!("Declaration stub written: {}", target.display());
        Ok(target)
    }
}

/// Write the declaration stub into `working_directory/dist/@polygonjs/`
pub fn write_declaration_stub(working_directory: &Path) -> TypingsResult<PathBuf> {
    DeclarationArtifact.write_to(working_directory)
}

/// Write the declaration stub relative to the process working directory
pub fn write_declaration_stub_in_current_dir() -> TypingsResult<PathBuf> {
    let cwd = std::env::current_dir().map_err(TypingsError::CurrentDir)?;
    write_declaration_stub(&cwd)
}
