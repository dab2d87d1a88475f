//! Portfolio data model.
//!
//! The gallery view is driven by a plain list of projects, each carrying an
//! ordered image sequence. Projects load from a `portfolio.toml` next to the
//! config; when no file exists the built-in demo portfolio is used so the
//! binary always has something to show.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read portfolio file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse portfolio file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One portfolio entry: a project card plus its image sequence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Portfolio {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Sample portfolio used when no `portfolio.toml` is present.
    pub fn demo() -> Self {
        let shots = |dir: &str, count: usize| -> Vec<String> {
            (1..=count).map(|i| format!("assets/{dir}/{i}.png")).collect()
        };
        Self {
            projects: vec![
                Project {
                    title: "Barbershop Website".to_string(),
                    description: "Marketing site for a barbershop with appointment booking and a blog."
                        .to_string(),
                    tags: vec!["WordPress".into(), "PHP".into(), "HTML/CSS".into()],
                    images: shots("barbershop", 5),
                },
                Project {
                    title: "Wedding Website".to_string(),
                    description: "Elegant wedding site with an interactive photo gallery.".to_string(),
                    tags: vec!["WordPress".into(), "PHP".into(), "HTML/CSS".into()],
                    images: shots("wedding", 9),
                },
                Project {
                    title: "Canteen Check-in System".to_string(),
                    description: "Access counter and registration app for a canteen, with an admin panel."
                        .to_string(),
                    tags: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
                    images: shots("canteen", 5),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_portfolio_toml() {
        let toml = r#"
            [[projects]]
            title = "Demo"
            description = "A demo project"
            tags = ["Rust"]
            images = ["a.png", "b.png"]

            [[projects]]
            title = "Bare"
        "#;
        let portfolio: Portfolio = toml::from_str(toml).unwrap();
        assert_eq!(portfolio.projects.len(), 2);
        assert_eq!(portfolio.projects[0].images, vec!["a.png", "b.png"]);
        assert!(portfolio.projects[1].images.is_empty());
        assert!(portfolio.projects[1].tags.is_empty());
    }

    #[test]
    fn demo_portfolio_has_image_sequences() {
        let demo = Portfolio::demo();
        assert!(!demo.projects.is_empty());
        for project in &demo.projects {
            assert!(!project.images.is_empty());
        }
    }

    #[test]
    fn demo_assets_ship_with_the_repo() {
        // Demo paths are relative to the workspace root, where the binary
        // is run from.
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        for project in Portfolio::demo().projects {
            for image in &project.images {
                assert!(root.join(image).is_file(), "missing demo asset: {image}");
            }
        }
    }
}
