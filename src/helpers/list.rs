//! Sequence helpers over collection views

use crate::content::Document;

/// First `n` documents of a view
pub fn limit(docs: &[Document], n: usize) -> &[Document] {
    &docs[..n.min(docs.len())]
}

/// Documents whose metadata field equals the given value
///
/// An absent field never matches; it is not an error.
pub fn where_eq<'a>(docs: &'a [Document], key: &str, value: &str) -> Vec<&'a Document> {
    docs.iter()
        .filter(|d| {
            d.field(key)
                .map(|v| value_to_string(&v) == value)
                .unwrap_or(false)
        })
        .collect()
}

/// Documents carrying the given category
pub fn category_filter<'a>(docs: &'a [Document], category: &str) -> Vec<&'a Document> {
    docs.iter()
        .filter(|d| d.category.as_deref() == Some(category))
        .collect()
}

/// Render a scalar YAML value for comparison or display
fn value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        _ => format!("{:?}", value),
    }
}
