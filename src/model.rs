#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,         // Display title, weighted highest
    pub description: String,   // One-line summary
    pub path: String,          // Relative path or absolute URL
    pub external: bool,        // Opens in a new view
    pub keywords: Vec<String>, // Extra search terms, may be empty
}

impl CatalogEntry {
    /// Builds an entry whose `external` flag is derived from the path scheme.
    pub fn new(title: &str, description: &str, path: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            path: path.to_string(),
            external: is_external_path(path),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }
}

pub fn is_external_path(path: &str) -> bool {
    let lower = path.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("mailto:")
}

#[derive(Debug, Clone)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    External(String),
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_flag_follows_scheme() {
        assert!(CatalogEntry::new("GitHub", "code", "https://github.com/me").external);
        assert!(CatalogEntry::new("Mail", "say hi", "mailto:me@example.com").external);
        assert!(!CatalogEntry::new("About", "me", "/about").external);
        assert!(!CatalogEntry::new("Now", "current", "now.html").external);
    }

    #[test]
    fn keywords_default_to_empty() {
        let entry = CatalogEntry::new("Home", "start", "/");
        assert!(entry.keywords.is_empty());
        let entry = entry.with_keywords(&["resume", "cv"]);
        assert_eq!(entry.keywords, vec!["resume".to_string(), "cv".to_string()]);
    }
}
