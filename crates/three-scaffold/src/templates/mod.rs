//! Project templates shipped with the tool
//!
//! The assets live under `crates/three-scaffold/templates/` and are compiled
//! into the binary; [`copier`] writes the variant-appropriate set into a new
//! project.

pub mod copier;
pub mod embedded;

pub use copier::{populate, template_set, TemplateFile};
