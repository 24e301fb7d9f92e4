//! Writing the shipped template files into a new project

use super::embedded;
use crate::error::ScaffoldError;
use colored::Colorize;
use std::path::Path;
use tokio::fs;

/// One template: embedded contents plus a destination relative to the
/// project root.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub contents: &'static str,
    pub dest: &'static str,
}

const PLAIN_SET: &[TemplateFile] = &[
    TemplateFile {
        contents: embedded::INDEX_HTML,
        dest: "index.html",
    },
    TemplateFile {
        contents: embedded::ENTRY_POINT,
        dest: "src/index.js",
    },
    TemplateFile {
        contents: embedded::WEBPACK_CONFIG,
        dest: "webpack.config.js",
    },
];

const TYPESCRIPT_SET: &[TemplateFile] = &[
    TemplateFile {
        contents: embedded::INDEX_HTML,
        dest: "index.html",
    },
    TemplateFile {
        contents: embedded::ENTRY_POINT,
        dest: "src/index.ts",
    },
    TemplateFile {
        contents: embedded::WEBPACK_CONFIG_TS,
        dest: "webpack.config.js",
    },
    TemplateFile {
        contents: embedded::TSCONFIG,
        dest: "tsconfig.json",
    },
];

/// The fixed set of files for a project, in write order.
pub fn template_set(typescript: bool) -> &'static [TemplateFile] {
    if typescript {
        TYPESCRIPT_SET
    } else {
        PLAIN_SET
    }
}

/// Write every template for the chosen variant into `root`.
///
/// Writes run one after another and each overwrites any existing file at its
/// destination. Destinations under `src/` assume the directory layout was
/// already created. A failed write aborts the rest; earlier files stay.
pub async fn populate(root: &Path, project: &str, typescript: bool) -> Result<(), ScaffoldError> {
    for template in template_set(typescript) {
        let target = root.join(template.dest);
        fs::write(&target, template.contents)
            .await
            .map_err(|source| ScaffoldError::Copy {
                dest: template.dest,
                source,
            })?;

        let (file, location) = match template.dest.rsplit_once('/') {
            Some((dir, file)) => (file, format!("{project}/{dir}")),
            None => (template.dest, project.to_string()),
        };
        println!("{} {} to {}", "Copied".green(), file, location);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_entry_point_per_variant() {
        let plain: Vec<_> = template_set(false).iter().map(|t| t.dest).collect();
        let typescript: Vec<_> = template_set(true).iter().map(|t| t.dest).collect();

        assert!(plain.contains(&"src/index.js"));
        assert!(!plain.contains(&"src/index.ts"));
        assert!(typescript.contains(&"src/index.ts"));
        assert!(!typescript.contains(&"src/index.js"));
    }

    #[test]
    fn tsconfig_ships_only_with_typescript() {
        assert!(!template_set(false).iter().any(|t| t.dest == "tsconfig.json"));
        assert!(template_set(true).iter().any(|t| t.dest == "tsconfig.json"));
    }

    #[test]
    fn both_variants_share_markup_and_entry_contents() {
        for set in [template_set(false), template_set(true)] {
            assert_eq!(set[0].dest, "index.html");
            assert!(set.iter().any(|t| t.dest == "webpack.config.js"));
        }

        // The same entry template lands under both names.
        let plain_entry = template_set(false)
            .iter()
            .find(|t| t.dest == "src/index.js")
            .unwrap();
        let ts_entry = template_set(true)
            .iter()
            .find(|t| t.dest == "src/index.ts")
            .unwrap();
        assert_eq!(plain_entry.contents, ts_entry.contents);
    }

    #[test]
    fn variant_configs_target_their_own_entry() {
        let plain = template_set(false)
            .iter()
            .find(|t| t.dest == "webpack.config.js")
            .unwrap();
        let typescript = template_set(true)
            .iter()
            .find(|t| t.dest == "webpack.config.js")
            .unwrap();

        assert!(plain.contents.contains("./src/index.js"));
        assert!(typescript.contents.contains("./src/index.ts"));
        assert!(typescript.contents.contains("ts-loader"));
        assert!(!plain.contents.contains("ts-loader"));
    }

    #[tokio::test]
    async fn populate_writes_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        tokio::fs::create_dir(root.join("src")).await.unwrap();
        tokio::fs::write(root.join("index.html"), "stale").await.unwrap();

        populate(root, "demo", false).await.unwrap();

        let html = std::fs::read_to_string(root.join("index.html")).unwrap();
        assert_eq!(html, embedded::INDEX_HTML);
        assert!(root.join("src/index.js").exists());
        assert!(root.join("webpack.config.js").exists());
    }

    #[tokio::test]
    async fn failed_copy_aborts_the_rest_but_keeps_earlier_files() {
        let tmp = tempfile::tempdir().unwrap();
        // No src/ layout: the entry-point write fails, but index.html was
        // already written and stays behind.
        let err = populate(tmp.path(), "demo", false).await.unwrap_err();

        assert!(matches!(
            err,
            ScaffoldError::Copy {
                dest: "src/index.js",
                ..
            }
        ));
        assert!(tmp.path().join("index.html").exists());
        assert!(!tmp.path().join("webpack.config.js").exists());
    }
}
