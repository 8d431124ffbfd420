//! polysite: a multi-language content collection engine
//!
//! Loads a corpus of markdown documents laid out as
//! `<lang>/<section>/<slug>.md`, classifies them into per-language
//! blog/projects buckets, and exposes seven named ordered collection
//! views to a rendering layer.

pub mod collections;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod i18n;

use anyhow::Result;
use std::path::Path;

use collections::{CollectionViews, Corpus};
use content::ContentLoader;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site handle from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Load the corpus snapshot from the source directory
    pub fn load_corpus(&self) -> Result<Corpus> {
        ContentLoader::new(self).load_corpus()
    }

    /// Load the corpus and compute all collection views
    pub fn build_collections(&self) -> Result<CollectionViews> {
        let corpus = self.load_corpus()?;
        Ok(CollectionViews::build(&corpus))
    }
}
