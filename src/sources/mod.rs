use crate::config::Config;
use crate::model::CatalogEntry;
use anyhow::Result;

pub trait Source {
    fn scan(&self) -> Result<Vec<CatalogEntry>>;
}

pub mod builtin;
pub mod custom;

/// Builds the catalog once at startup: configured items win, the built-in
/// site pages fill in when nothing is configured.
pub fn load_catalog(config: &Config) -> Result<Vec<CatalogEntry>> {
    let entries = custom::CustomSource::new(&config.catalog).scan()?;
    if !entries.is_empty() || !config.general.include_builtin {
        return Ok(entries);
    }
    builtin::BuiltinSource.scan()
}
