use std::collections::HashMap;

/// Three-tier text matcher: contiguous substring scores 2, in-order
/// subsequence scores 1, a synonym hit scores 1, anything else 0.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    synonyms: HashMap<String, Vec<String>>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::with_synonyms(default_synonyms())
    }

    /// Keys are lowercased and empty synonym words dropped, so a synonym can
    /// never match an empty text.
    pub fn with_synonyms(table: HashMap<String, Vec<String>>) -> Self {
        let synonyms = table
            .into_iter()
            .map(|(key, words)| {
                let words = words
                    .into_iter()
                    .map(|w| w.to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (key.to_lowercase(), words)
            })
            .collect();
        Self { synonyms }
    }

    pub fn score(&self, query: &str, text: &str) -> u32 {
        let query = query.to_lowercase();
        let text = text.to_lowercase();

        if text.contains(&query) {
            return 2;
        }
        if is_subsequence(&query, &text) {
            return 1;
        }
        match self.synonyms.get(&query) {
            Some(words) if words.iter().any(|w| text.contains(w.as_str())) => 1,
            _ => 0,
        }
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut wanted = needle.chars().peekable();
    for c in haystack.chars() {
        match wanted.peek() {
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

pub fn default_synonyms() -> HashMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 1] = [
        ("resume", &["now", "current", "work", "experience", "cv"]),
    ];
    table
        .iter()
        .map(|(key, words)| (key.to_string(), words.iter().map(|w| w.to_string()).collect()))
        .collect()
}
