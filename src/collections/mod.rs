//! Collections module - the corpus snapshot and its derived views
//!
//! A [`Corpus`] is an immutable snapshot of every classified document in
//! discovery order. [`CollectionViews`] are the seven named projections
//! handed to the rendering layer: one `projects`/`blog` pair per language
//! plus the cross-language `blog_all` feed.

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use indexmap::IndexMap;

use crate::content::{Document, Language, Section};

/// Name of the cross-language feed view
pub const BLOG_ALL: &str = "blog_all";

/// Immutable corpus snapshot, documents in discovery order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create a snapshot from documents in discovery order
    ///
    /// `corpus_order` is normalized to the position in the given sequence
    /// so that the ordering invariant holds regardless of how the
    /// documents were produced.
    pub fn new(mut documents: Vec<Document>) -> Self {
        for (i, doc) in documents.iter_mut().enumerate() {
            doc.corpus_order = i;
        }
        Self { documents }
    }

    /// All documents, in discovery order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Glob-style lookup over document source paths
    ///
    /// `*` stays within one path segment, so `*/blog/*` matches blog
    /// documents of every language but nothing nested deeper.
    pub fn matching(&self, pattern: &str) -> Result<Vec<&Document>> {
        let pattern = Pattern::new(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?;
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        Ok(self
            .documents
            .iter()
            .filter(|d| pattern.matches_with(&d.source, options))
            .collect())
    }

    /// Documents of one `(language, section)` bucket, most recently
    /// discovered first
    ///
    /// Discovery order is filename-lexicographic, and post filenames are
    /// date-prefixed by convention, so reversing yields newest-first
    /// without parsing any dates. An empty bucket is a valid result.
    pub fn select(&self, language: Language, section: Section) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| d.language == language && d.section == section)
            .cloned()
            .collect();
        docs.reverse();
        docs
    }

    /// Blog documents of every language carrying the `blogpost` category,
    /// in discovery order (deliberately NOT reversed)
    ///
    /// The category filter keeps listing pages and other non-post blog
    /// documents out of the feed. Documents without a category never
    /// match.
    pub fn all_blog_posts(&self) -> Vec<Document> {
        self.documents
            .iter()
            .filter(|d| d.section == Section::Blog && d.is_blog_post())
            .cloned()
            .collect()
    }
}

/// The name a `(language, section)` view is registered under
pub fn view_name(language: Language, section: Section) -> String {
    format!("{}_{}", section.dir(), language.code())
}

/// The seven named, ordered, read-only collection views
///
/// Built once per corpus snapshot and never mutated afterwards; the
/// rendering layer addresses views by name.
#[derive(Debug, Clone)]
pub struct CollectionViews {
    views: IndexMap<String, Vec<Document>>,
}

impl CollectionViews {
    /// Compute all seven views from a corpus snapshot
    pub fn build(corpus: &Corpus) -> Self {
        let mut views = IndexMap::new();

        for language in Language::ALL {
            for section in Section::ALL {
                views.insert(
                    view_name(language, section),
                    corpus.select(language, section),
                );
            }
        }
        views.insert(BLOG_ALL.to_string(), corpus.all_blog_posts());

        Self { views }
    }

    /// Look up a view by name
    pub fn get(&self, name: &str) -> Option<&[Document]> {
        self.views.get(name).map(Vec::as_slice)
    }

    /// View names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// Iterate over all views in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Document])> {
        self.views.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
