use std::io::Write;
use std::process::{Command, Stdio};
use anyhow::{bail, Result};
use crate::model::{CatalogEntry, Destination};
use crate::config::GeneralConfig;

pub fn resolve(entry: &CatalogEntry, general: &GeneralConfig) -> Destination {
    if entry.external {
        return Destination::External(entry.path.clone());
    }

    match general.base_url.as_deref() {
        Some(base) if !base.is_empty() => {
            let path = entry.path.trim_start_matches('/');
            Destination::Internal(format!("{}/{}", base.trim_end_matches('/'), path))
        }
        _ => Destination::Internal(entry.path.clone()),
    }
}

/// External links go to the opener; internal paths are written to `output`
/// for the hosting view to load in place.
pub fn open<W: Write>(destination: &Destination, general: &GeneralConfig, output: &mut W) -> Result<()> {
    match destination {
        Destination::Internal(path) => {
            writeln!(output, "{}", path)?;
            Ok(())
        }
        Destination::External(url) => {
            let mut parts = general.opener.split_whitespace();
            let Some(program) = parts.next() else {
                bail!("no opener configured for {}", url);
            };

            log::info!("Opening {} with {}", url, program);
            Command::new(program)
                .args(parts)
                .arg(url)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()?;
            Ok(())
        }
    }
}
