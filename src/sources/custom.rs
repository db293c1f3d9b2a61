use crate::config::CatalogItem;
use crate::model::CatalogEntry;
use crate::sources::Source;
use anyhow::Result;
use log::info;

/// Entries declared under `[[catalog]]` in the config file.
pub struct CustomSource<'a> {
    items: &'a [CatalogItem],
}

impl<'a> CustomSource<'a> {
    pub fn new(items: &'a [CatalogItem]) -> Self {
        Self { items }
    }
}

impl Source for CustomSource<'_> {
    fn scan(&self) -> Result<Vec<CatalogEntry>> {
        let entries = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_entry(i))
            .collect::<Result<Vec<_>, _>>()?;
        info!("CustomSource: found {} entries", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn keeps_declaration_order() {
        let config = parse_config(
            "[[catalog]]\ntitle = \"B\"\npath = \"/b\"\n\n[[catalog]]\ntitle = \"A\"\npath = \"/a\"\n",
        )
        .unwrap();
        let entries = CustomSource::new(&config.catalog).scan().unwrap();
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn invalid_item_fails_the_scan() {
        let config = parse_config("[[catalog]]\ntitle = \"\"\npath = \"/x\"\n").unwrap();
        assert!(CustomSource::new(&config.catalog).scan().is_err());
    }
}
