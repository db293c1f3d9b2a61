use crate::matcher::FuzzyMatcher;
use crate::model::CatalogEntry;
use crate::ranker::rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    Open,
}

/// One palette over a fixed catalog. Owned by the event loop.
pub struct PaletteSession {
    catalog: Vec<CatalogEntry>,
    matcher: FuzzyMatcher,
    visibility: Visibility,
    query: String,
    results: Vec<CatalogEntry>,
    selected_index: usize,
}

impl PaletteSession {
    pub fn new(catalog: Vec<CatalogEntry>, matcher: FuzzyMatcher) -> Self {
        Self {
            catalog,
            matcher,
            visibility: Visibility::Closed,
            query: String::new(),
            results: Vec::new(),
            selected_index: 0,
        }
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
        self.query.clear();
        self.update_results();
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.open(),
        }
    }

    pub fn set_query(&mut self, query: &str) {
        if !self.is_open() {
            return;
        }
        self.query = query.to_string();
        self.update_results();
    }

    fn update_results(&mut self) {
        self.results = rank(&self.matcher, &self.query, &self.catalog);
        self.selected_index = 0;
        log::debug!("PaletteSession: query='{}', result_count={}", self.query, self.results.len());
    }

    pub fn move_selection(&mut self, delta: i32) {
        if !self.is_open() || self.results.is_empty() {
            return;
        }

        let len = self.results.len() as i64;
        let new_index = (self.selected_index as i64 + delta as i64).rem_euclid(len);
        self.selected_index = new_index as usize;
    }

    /// Returns the highlighted entry and closes the palette. Does nothing when
    /// closed or when there are no matches.
    pub fn confirm(&mut self) -> Option<CatalogEntry> {
        if !self.is_open() {
            return None;
        }
        let chosen = self.selected().cloned()?;
        self.close();
        Some(chosen)
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        self.results.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn results(&self) -> &[CatalogEntry] {
        &self.results
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn no_matches(&self) -> bool {
        self.results.is_empty()
    }
}
