//! Template assets compiled into the binary
//!
//! The files under `crates/three-scaffold/templates/` are the canonical
//! sources. `include_str!` paths are resolved relative to this file and
//! checked at compile time, so a renamed asset fails the build instead of
//! the user's scaffold run.

/// Markup shell that loads the bundle from `dist/`.
pub const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// Entry point with a minimal spinning-cube scene. Valid as both plain
/// JavaScript and TypeScript, so both variants ship the same contents under
/// different names.
pub const ENTRY_POINT: &str = include_str!("../../templates/index.js");

/// Bundler config for the plain variant.
pub const WEBPACK_CONFIG: &str = include_str!("../../templates/webpack.config.js");

/// Bundler config for the typescript variant: `.ts` entry plus a ts-loader
/// rule. Written into the project as plain `webpack.config.js`.
pub const WEBPACK_CONFIG_TS: &str = include_str!("../../templates/webpack.config.ts.js");

/// Compiler configuration for the typescript variant.
pub const TSCONFIG: &str = include_str!("../../templates/tsconfig.json");
