//! Document model and path classification

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Category value that marks a blog document as a feed-worthy post
pub const BLOG_POST_CATEGORY: &str = "blogpost";

/// Content language of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    De,
}

impl Language {
    /// All supported languages, in site navigation order
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::De];

    /// The two-letter code used as the leading path segment
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
        }
    }

    /// Parse a path segment into a language, `None` for anything unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "de" => Some(Language::De),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Content section a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Blog,
    Projects,
}

impl Section {
    /// Sections in the order collections are registered
    pub const ALL: [Section; 2] = [Section::Projects, Section::Blog];

    /// The directory name used as the second path segment
    pub fn dir(&self) -> &'static str {
        match self {
            Section::Blog => "blog",
            Section::Projects => "projects",
        }
    }

    /// Parse a path segment into a section, `None` for anything unknown
    pub fn from_dir(dir: &str) -> Option<Self> {
        match dir {
            "blog" => Some(Section::Blog),
            "projects" => Some(Section::Projects),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}

/// A classified corpus-relative path: `<lang>/<section>/<slug>.md`
///
/// Classification is the single place where language and section are
/// derived from a path. A path that does not fit the layout (wrong depth,
/// unknown language, unknown section) simply fails to classify; that is
/// not an error, the file just belongs to no collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    pub language: Language,
    pub section: Section,
    pub slug: String,
}

impl DocumentPath {
    /// Classify a corpus-relative path with `/` separators
    pub fn parse(source: &str) -> Option<Self> {
        let mut parts = source.split('/');
        let language = Language::from_code(parts.next()?)?;
        let section = Section::from_dir(parts.next()?)?;
        let file = parts.next()?;
        // Exactly three segments: nested files are not collection members
        if parts.next().is_some() {
            return None;
        }
        let slug = file
            .strip_suffix(".md")
            .or_else(|| file.strip_suffix(".markdown"))?;
        if slug.is_empty() {
            return None;
        }
        Some(Self {
            language,
            section,
            slug: slug.to_string(),
        })
    }
}

/// One content item (a blog post or a project write-up)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Corpus-relative source path
    pub source: String,

    /// Language, derived from the first path segment
    pub language: Language,

    /// Section, derived from the second path segment
    pub section: Section,

    /// URL-friendly name, derived from the filename
    pub slug: String,

    /// Document title (front-matter, or the filename as fallback)
    pub title: String,

    /// Publication date, when the front-matter carries one
    pub date: Option<DateTime<Local>>,

    /// Front-matter category; absent is a valid state, not a failure
    pub category: Option<String>,

    /// Remaining front-matter fields
    pub extra: HashMap<String, serde_yaml::Value>,

    /// Position in corpus discovery order
    pub corpus_order: usize,
}

impl Document {
    /// Create a document from a classified path with empty metadata
    pub fn new(source: String, path: DocumentPath, corpus_order: usize) -> Self {
        Self {
            source,
            language: path.language,
            section: path.section,
            title: path.slug.clone(),
            slug: path.slug,
            date: None,
            category: None,
            extra: HashMap::new(),
            corpus_order,
        }
    }

    /// Whether this document carries the feed category
    pub fn is_blog_post(&self) -> bool {
        self.category.as_deref() == Some(BLOG_POST_CATEGORY)
    }

    /// Look up a metadata field by name
    ///
    /// Resolves the typed fields first, then falls back to the open
    /// front-matter map. Absent fields are `None`, never an error.
    pub fn field(&self, key: &str) -> Option<serde_yaml::Value> {
        match key {
            "title" => Some(serde_yaml::Value::String(self.title.clone())),
            "category" => self
                .category
                .as_ref()
                .map(|c| serde_yaml::Value::String(c.clone())),
            _ => self.extra.get(key).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_paths() {
        let path = DocumentPath::parse("en/blog/hello-world.md").unwrap();
        assert_eq!(path.language, Language::En);
        assert_eq!(path.section, Section::Blog);
        assert_eq!(path.slug, "hello-world");

        let path = DocumentPath::parse("de/projects/site-relaunch.markdown").unwrap();
        assert_eq!(path.language, Language::De);
        assert_eq!(path.section, Section::Projects);
        assert_eq!(path.slug, "site-relaunch");
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        assert!(DocumentPath::parse("fr/blog/post.md").is_none());
        assert!(DocumentPath::parse("english/blog/post.md").is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        assert!(DocumentPath::parse("en/notes/post.md").is_none());
    }

    #[test]
    fn test_parse_rejects_wrong_depth() {
        // Top-level pages and nested files are not collection members
        assert!(DocumentPath::parse("index.md").is_none());
        assert!(DocumentPath::parse("en/about.md").is_none());
        assert!(DocumentPath::parse("en/blog/2024/post.md").is_none());
    }

    #[test]
    fn test_parse_rejects_non_markdown() {
        assert!(DocumentPath::parse("en/blog/cover.png").is_none());
        assert!(DocumentPath::parse("en/blog/.md").is_none());
    }

    #[test]
    fn test_is_blog_post() {
        let mut doc = Document::new(
            "en/blog/a.md".to_string(),
            DocumentPath::parse("en/blog/a.md").unwrap(),
            0,
        );
        assert!(!doc.is_blog_post());

        doc.category = Some("blogpost".to_string());
        assert!(doc.is_blog_post());

        doc.category = Some("listing".to_string());
        assert!(!doc.is_blog_post());
    }

    #[test]
    fn test_field_lookup() {
        let mut doc = Document::new(
            "es/blog/b.md".to_string(),
            DocumentPath::parse("es/blog/b.md").unwrap(),
            0,
        );
        doc.category = Some("blogpost".to_string());
        doc.extra.insert(
            "author".to_string(),
            serde_yaml::Value::String("Nadia".to_string()),
        );

        assert_eq!(
            doc.field("category"),
            Some(serde_yaml::Value::String("blogpost".to_string()))
        );
        assert_eq!(
            doc.field("author"),
            Some(serde_yaml::Value::String("Nadia".to_string()))
        );
        assert_eq!(doc.field("missing"), None);
    }
}
