use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog row: {0}")]
    Row(#[from] csv::Error),
}

/// One row of the ecosystem catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(rename = "Entity")]
    pub name: String,
    #[serde(rename = "Section")]
    pub raw_category: String,
    #[serde(rename = "Type_or_Role", default)]
    pub role: String,
    #[serde(rename = "Tier", default)]
    pub tier: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Website", default)]
    pub website: String,
}

impl EntityRecord {
    fn trim_fields(&mut self) {
        for field in [
            &mut self.name,
            &mut self.raw_category,
            &mut self.role,
            &mut self.tier,
            &mut self.status,
            &mut self.website,
        ] {
            let trimmed = field.trim();
            if trimmed.len() != field.len() {
                *field = trimmed.to_string();
            }
        }
    }
}

pub fn read_catalog(path: &Path) -> Result<Vec<EntityRecord>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&contents)
}

pub fn parse_catalog(contents: &str) -> Result<Vec<EntityRecord>, CatalogError> {
    // Header row is required; blank lines are not rows.
    let cleaned = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(cleaned.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<EntityRecord>() {
        let mut record = row?;
        record.trim_fields();
        if record.name.is_empty() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}
