//! Content module - document model, front-matter, and corpus loading

mod document;
mod frontmatter;
pub mod loader;

pub use document::{Document, DocumentPath, Language, Section, BLOG_POST_CATEGORY};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
