use crate::model::CatalogEntry;
use crate::sources::Source;
use anyhow::Result;
use log::info;

/// The site's own pages.
pub struct BuiltinSource;

impl Source for BuiltinSource {
    fn scan(&self) -> Result<Vec<CatalogEntry>> {
        let entries = vec![
            CatalogEntry::new("Home", "Back to the start page", "/"),
            CatalogEntry::new("About", "Who I am and what I do", "/about.html"),
            CatalogEntry::new("Now / Current", "What I'm focused on these days", "/now.html")
                .with_keywords(&["resume", "cv"]),
            CatalogEntry::new("Projects", "Things I've designed and built", "/projects.html")
                .with_keywords(&["portfolio", "work"]),
            CatalogEntry::new("Writing", "Notes and essays", "/writing.html")
                .with_keywords(&["blog", "posts"]),
            CatalogEntry::new("Contact", "Email and social links", "/#contact")
                .with_keywords(&["email", "social"]),
            CatalogEntry::new("GitHub", "Source code for my projects", "https://github.com/")
                .with_keywords(&["code", "repositories"]),
        ];
        info!("BuiltinSource: found {} entries", entries.len());
        Ok(entries)
    }
}
