//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/en/blog/") // -> "/en/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Resolve a site-relative path against the configured site URL
///
/// # Examples
/// ```ignore
/// to_absolute_url(&config, "/en/blog/") // -> "https://example.com/en/blog/"
/// ```
pub fn to_absolute_url(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/en/blog/"), "/en/blog/");
        assert_eq!(url_for(&config, "en/blog/"), "/en/blog/");
        assert_eq!(url_for(&config, ""), "/");
    }

    #[test]
    fn test_to_absolute_url() {
        let config = test_config();
        assert_eq!(
            to_absolute_url(&config, "/en/blog/"),
            "https://example.com/en/blog/"
        );
    }

    #[test]
    fn test_to_absolute_url_with_subdirectory_root() {
        let config = SiteConfig {
            root: "/site/".to_string(),
            ..test_config()
        };
        assert_eq!(
            to_absolute_url(&config, "/en/blog/"),
            "https://example.com/site/en/blog/"
        );
    }
}
