use crate::catalog::EntityRecord;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A top-level display section and the subcategory buckets it renders.
/// Static configuration; never derived from catalog data.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl Section {
    pub fn new(name: &str, subcategories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The fixed taxonomy the whole map renders against: an ordered section
/// list plus the raw catalog label -> display section mapping. Immutable;
/// construct once and pass it in, so tests can substitute alternates.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    sections: Vec<Section>,
    raw_to_section: HashMap<String, String>,
}

static HEDERA: Lazy<Taxonomy> = Lazy::new(build_hedera);

impl Taxonomy {
    pub fn new(
        sections: Vec<Section>,
        raw_labels: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        let raw_to_section = raw_labels
            .into_iter()
            .map(|(raw, section)| (raw.to_string(), section.to_string()))
            .collect();
        Self {
            sections,
            raw_to_section,
        }
    }

    /// The production taxonomy, matching hedera.com/ecosystem naming.
    pub fn hedera() -> &'static Taxonomy {
        &HEDERA
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Map a raw catalog label plus role to a display (section,
    /// subcategory) pair. Unknown raw labels yield `None`. The role is
    /// matched case-insensitively against the section's configured
    /// subcategories, falling back to the verbatim role; the final key
    /// must name a configured bucket or the record is excluded.
    pub fn classify(&self, raw_category: &str, role: &str) -> Option<(&str, &str)> {
        let section_name = self.raw_to_section.get(raw_category)?;
        let section = self.section(section_name)?;
        let role = role.trim();
        let subcategory = section
            .subcategories
            .iter()
            .find(|sub| sub.as_str() == role || sub.eq_ignore_ascii_case(role))?;
        Some((section.name.as_str(), subcategory.as_str()))
    }
}

fn build_hedera() -> Taxonomy {
    let sections = vec![
        Section::new("Wallets", &["Wallet"]),
        Section::new("Custodians", &["Custodian"]),
        Section::new("Exchanges", &["Exchange"]),
        Section::new("Oracles", &["Oracle"]),
        Section::new("Bridges and Interoperability", &["Bridge", "Interoperability"]),
        Section::new("Services", &["Infrastructure", "API Provider"]),
        Section::new("Onramps", &["Onramp"]),
        Section::new("Implementation Partners", &["Partner"]),
        Section::new("Advisory Firms", &["Advisor"]),
        Section::new("Risk and Compliance", &["Compliance"]),
        Section::new("Stablecoin Infrastructure", &["Stablecoin"]),
        Section::new("Tooling and Solutions", &["Tooling"]),
        Section::new("DeFi", &["DEX", "Lending", "Staking", "Suite"]),
        Section::new("NFT Markets", &["NFT Platform", "NFT Marketplace"]),
        Section::new(
            "Real World Assets",
            &[
                "Commodities",
                "Real Estate",
                "Carbon Credits",
                "Security Tokens",
                "RWA DeFi",
                "Exchange",
                "Environmental",
            ],
        ),
        Section::new("Gaming & ENT", &["Gaming", "Music"]),
        Section::new("Hedera Council", &["Council Member"]),
        Section::new("Independent Core Organizations", &["Core Organization"]),
        Section::new("Meme Tokens", &["Meme Token"]),
        Section::new("Native Services", &["Native Service"]),
    ];

    let raw_labels = [
        ("Wallets", "Wallets"),
        ("Custodians", "Custodians"),
        ("Exchanges", "Exchanges"),
        ("Oracles", "Oracles"),
        ("Bridges and Interoperability", "Bridges and Interoperability"),
        ("Services", "Services"),
        ("Onramps", "Onramps"),
        ("Implementation Partners", "Implementation Partners"),
        ("Advisory Firms", "Advisory Firms"),
        ("Risk and Compliance", "Risk and Compliance"),
        ("Stablecoin Infrastructure", "Stablecoin Infrastructure"),
        ("Tooling and Solutions", "Tooling and Solutions"),
        ("DeFi", "DeFi"),
        ("NFTs", "NFT Markets"),
        ("Real World Assets", "Real World Assets"),
        ("Gaming and Entertainment", "Gaming & ENT"),
        ("Hedera Council", "Hedera Council"),
        ("Independent Core Organizations", "Independent Core Organizations"),
        ("Meme Tokens", "Meme Tokens"),
        ("Native Services", "Native Services"),
    ];

    Taxonomy::new(sections, raw_labels)
}

/// One subcategory bucket with the records that landed in it, in catalog
/// order.
#[derive(Debug, Clone)]
pub struct SubcategoryEntries {
    pub name: String,
    pub items: Vec<EntityRecord>,
}

/// One section's grouped records, subcategories in configured order.
#[derive(Debug, Clone)]
pub struct SectionEntries {
    pub name: String,
    pub subcategories: Vec<SubcategoryEntries>,
}

impl SectionEntries {
    /// All records across subcategories, in configured bucket order.
    pub fn items(&self) -> impl Iterator<Item = &EntityRecord> {
        self.subcategories.iter().flat_map(|sub| sub.items.iter())
    }

    /// Records sorted by the stable display key: case-sensitive lexical
    /// entity name. This is what makes packing reproducible regardless of
    /// catalog row order.
    pub fn sorted_items(&self) -> Vec<&EntityRecord> {
        let mut items: Vec<&EntityRecord> = self.items().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn is_empty(&self) -> bool {
        self.subcategories.iter().all(|sub| sub.items.is_empty())
    }
}

/// The grouped catalog: every configured section with pre-created buckets,
/// plus the count of rows that had no mapping.
#[derive(Debug, Clone)]
pub struct SectionMap {
    pub sections: Vec<SectionEntries>,
    pub dropped: usize,
}

impl SectionMap {
    pub fn section(&self, name: &str) -> Option<&SectionEntries> {
        self.sections.iter().find(|s| s.name == name)
    }
}

pub fn group_records(taxonomy: &Taxonomy, records: &[EntityRecord]) -> SectionMap {
    let mut sections: Vec<SectionEntries> = taxonomy
        .sections()
        .iter()
        .map(|section| SectionEntries {
            name: section.name.clone(),
            subcategories: section
                .subcategories
                .iter()
                .map(|sub| SubcategoryEntries {
                    name: sub.clone(),
                    items: Vec::new(),
                })
                .collect(),
        })
        .collect();

    let mut dropped = 0usize;
    for record in records {
        match taxonomy.classify(&record.raw_category, &record.role) {
            Some((section_name, subcategory)) => {
                let bucket = sections
                    .iter_mut()
                    .find(|s| s.name == section_name)
                    .and_then(|s| {
                        s.subcategories
                            .iter_mut()
                            .find(|sub| sub.name == subcategory)
                    });
                if let Some(bucket) = bucket {
                    bucket.items.push(record.clone());
                }
            }
            None => {
                dropped += 1;
                tracing::debug!(
                    entity = %record.name,
                    raw_category = %record.raw_category,
                    role = %record.role,
                    "no section mapping for catalog row, skipping"
                );
            }
        }
    }
    if dropped > 0 {
        tracing::warn!(dropped, "catalog rows without a section mapping were skipped");
    }

    SectionMap { sections, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, raw: &str, role: &str) -> EntityRecord {
        EntityRecord {
            name: name.to_string(),
            raw_category: raw.to_string(),
            role: role.to_string(),
            tier: String::new(),
            status: String::new(),
            website: String::new(),
        }
    }

    #[test]
    fn chainlink_classifies_into_oracles() {
        let taxonomy = Taxonomy::hedera();
        assert_eq!(
            taxonomy.classify("Oracles", "Oracle"),
            Some(("Oracles", "Oracle"))
        );
    }

    #[test]
    fn role_match_is_case_insensitive_and_returns_configured_spelling() {
        let taxonomy = Taxonomy::hedera();
        assert_eq!(
            taxonomy.classify("DeFi", "dex"),
            Some(("DeFi", "DEX"))
        );
    }

    #[test]
    fn raw_label_folding_maps_nfts_to_nft_markets() {
        let taxonomy = Taxonomy::hedera();
        assert_eq!(
            taxonomy.classify("NFTs", "NFT Marketplace"),
            Some(("NFT Markets", "NFT Marketplace"))
        );
    }

    #[test]
    fn unknown_raw_category_is_excluded() {
        let taxonomy = Taxonomy::hedera();
        assert_eq!(taxonomy.classify("Metaverse", "Gaming"), None);
    }

    #[test]
    fn unmatched_role_is_excluded() {
        let taxonomy = Taxonomy::hedera();
        assert_eq!(taxonomy.classify("Oracles", "Price Feed"), None);
    }

    #[test]
    fn classify_is_deterministic() {
        let taxonomy = Taxonomy::hedera();
        for _ in 0..3 {
            assert_eq!(
                taxonomy.classify("Services", "infrastructure"),
                Some(("Services", "Infrastructure"))
            );
        }
    }

    #[test]
    fn grouping_precreates_buckets_and_counts_drops() {
        let taxonomy = Taxonomy::hedera();
        let records = vec![
            record("Chainlink", "Oracles", "Oracle"),
            record("Mystery", "Metaverse", "Gaming"),
            record("Pyth", "Oracles", "Oracle"),
        ];
        let map = group_records(taxonomy, &records);
        assert_eq!(map.dropped, 1);

        let oracles = map.section("Oracles").unwrap();
        assert_eq!(oracles.subcategories.len(), 1);
        assert_eq!(oracles.subcategories[0].items.len(), 2);

        // Empty sections still exist with their configured buckets.
        let wallets = map.section("Wallets").unwrap();
        assert!(wallets.is_empty());
        assert_eq!(wallets.subcategories[0].name, "Wallet");
    }

    #[test]
    fn sorted_items_are_case_sensitive_lexical_regardless_of_input_order() {
        let taxonomy = Taxonomy::hedera();
        let forward = vec![
            record("Supra", "Oracles", "Oracle"),
            record("Chainlink", "Oracles", "Oracle"),
            record("Pyth", "Oracles", "Oracle"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = group_records(taxonomy, &forward);
        let b = group_records(taxonomy, &reversed);
        let names_a: Vec<&str> = a.section("Oracles").unwrap().sorted_items().iter().map(|r| r.name.as_str()).collect();
        let names_b: Vec<&str> = b.section("Oracles").unwrap().sorted_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names_a, vec!["Chainlink", "Pyth", "Supra"]);
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn alternate_taxonomy_can_be_substituted() {
        let taxonomy = Taxonomy::new(
            vec![Section::new("Tools", &["Compiler"])],
            [("Developer Tools", "Tools")],
        );
        assert_eq!(
            taxonomy.classify("Developer Tools", "compiler"),
            Some(("Tools", "Compiler"))
        );
        assert_eq!(taxonomy.classify("Oracles", "Oracle"), None);
    }
}
