//! Content loader - builds the corpus snapshot from the source directory
//!
//! The walk order is filename-lexicographic and deterministic; it defines
//! the corpus discovery order that collection ordering is built on.

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Document, DocumentPath, FrontMatter};
use crate::collections::Corpus;
use crate::Site;

/// Loads documents from the source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load the full corpus snapshot
    ///
    /// A missing source directory is a build-level failure; a single
    /// unreadable or unclassifiable file is logged and skipped.
    pub fn load_corpus(&self) -> Result<Corpus> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            bail!("source directory does not exist: {:?}", source_dir);
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let source = relative_source(source_dir, path);
            let Some(doc_path) = DocumentPath::parse(&source) else {
                // Listing pages, standalone pages and assets live outside
                // the <lang>/<section>/ layout and belong to no collection
                tracing::debug!("Skipping unclassified file: {}", source);
                continue;
            };

            match self.load_document(path, source, doc_path, documents.len()) {
                Ok(doc) => documents.push(doc),
                Err(e) => {
                    tracing::warn!("Failed to load document {:?}: {}", path, e);
                }
            }
        }

        tracing::info!("Loaded {} documents into corpus", documents.len());
        Ok(Corpus::new(documents))
    }

    /// Load a single document from a file
    fn load_document(
        &self,
        path: &Path,
        source: String,
        doc_path: DocumentPath,
        corpus_order: usize,
    ) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        let (fm, _body) = FrontMatter::parse(&content);

        let mut doc = Document::new(source, doc_path, corpus_order);
        doc.date = fm.parse_date();
        if let Some(title) = fm.title {
            doc.title = title;
        }
        doc.category = fm.category;
        doc.extra = fm.extra;

        Ok(doc)
    }
}

/// Corpus-relative path with `/` separators
fn relative_source(source_dir: &Path, path: &Path) -> String {
    path.strip_prefix(source_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, Section};
    use std::fs;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site_with_source(dir: &tempfile::TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    #[test]
    fn test_load_corpus_discovery_order() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");

        write_file(&src, "en/blog/c-third.md", "---\ntitle: Third\n---\n");
        write_file(&src, "en/blog/a-first.md", "---\ntitle: First\n---\n");
        write_file(&src, "en/blog/b-second.md", "---\ntitle: Second\n---\n");

        let site = site_with_source(&dir);
        let corpus = ContentLoader::new(&site).load_corpus().unwrap();

        let sources: Vec<_> = corpus.documents().iter().map(|d| d.source.as_str()).collect();
        assert_eq!(
            sources,
            vec!["en/blog/a-first.md", "en/blog/b-second.md", "en/blog/c-third.md"]
        );
        let orders: Vec<_> = corpus.documents().iter().map(|d| d.corpus_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_load_corpus_skips_unclassified_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");

        write_file(&src, "en/blog/post.md", "---\ncategory: blogpost\n---\n");
        write_file(&src, "en/about.md", "about page");
        write_file(&src, "index.md", "home");
        write_file(&src, "fr/blog/bonjour.md", "unsupported language");
        write_file(&src, "en/blog/notes.txt", "not markdown");

        let site = site_with_source(&dir);
        let corpus = ContentLoader::new(&site).load_corpus().unwrap();

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.documents()[0].source, "en/blog/post.md");
    }

    #[test]
    fn test_load_corpus_classifies_languages_and_sections() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");

        write_file(&src, "de/projects/relaunch.md", "---\ntitle: Relaunch\n---\n");
        write_file(&src, "es/blog/hola.md", "---\ntitle: Hola\n---\n");

        let site = site_with_source(&dir);
        let corpus = ContentLoader::new(&site).load_corpus().unwrap();

        let de = &corpus.documents()[0];
        assert_eq!(de.language, Language::De);
        assert_eq!(de.section, Section::Projects);
        assert_eq!(de.title, "Relaunch");

        let es = &corpus.documents()[1];
        assert_eq!(es.language, Language::Es);
        assert_eq!(es.section, Section::Blog);
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");

        write_file(&src, "en/projects/my-project.md", "no front matter\n");

        let site = site_with_source(&dir);
        let corpus = ContentLoader::new(&site).load_corpus().unwrap();
        assert_eq!(corpus.documents()[0].title, "my-project");
    }

    #[test]
    fn test_missing_source_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Site::new tolerates the missing directory; loading does not
        let site = Site::new(dir.path()).unwrap();
        assert!(ContentLoader::new(&site).load_corpus().is_err());
    }
}
