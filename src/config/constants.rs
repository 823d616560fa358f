//! Constants for vue3-typings

/// Build-output root produced by the upstream build
pub const DIST_DIR: &str = "dist";

/// Scoped package namespace, also the subdirectory under `dist`
pub const NAMESPACE: &str = "@polygonjs";

/// Module specifier declared by the stub
pub const MODULE_SPECIFIER: &str = "@polygonjs/vue3";

/// Declaration file name inside the namespace directory
pub const DECLARATION_FILE: &str = "vue3.common.d.ts";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
