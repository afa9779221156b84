use crate::layout::roster;
use crate::logo::{LogoData, LogoResolver};
use crate::taxonomy::SectionMap;
use crate::text;
use anyhow::{Context, Result};
use serde_json::json;
use std::fmt::Write as _;
use std::path::Path;

const SECTION_DATA_PLACEHOLDER: &str = "SECTION_DATA_PLACEHOLDER";
const SVG_CONTENT_PLACEHOLDER: &str = "SVG_CONTENT_PLACEHOLDER";
const MOBILE_SECTIONS_PLACEHOLDER: &str = "MOBILE_SECTIONS_PLACEHOLDER";
const FOOTER_LOGO_PLACEHOLDER: &str = "FOOTER_LOGO_PLACEHOLDER";

// Mobile display order: the roster and token sections lead, the service
// provider sections follow.
const MOBILE_ORDER: &[&str] = &[
    "Independent Core Organizations",
    "Hedera Council",
    "Native Services",
    "DeFi",
    "NFT Markets",
    "Gaming & ENT",
    "Real World Assets",
    "Meme Tokens",
    "Wallets",
    "Custodians",
    "Exchanges",
    "Bridges and Interoperability",
    "Services",
    "Oracles",
    "Onramps",
    "Implementation Partners",
    "Advisory Firms",
    "Risk and Compliance",
    "Stablecoin Infrastructure",
    "Tooling and Solutions",
];

/// Fills the page template: grouped section data as JSON, the SVG inlined,
/// generated mobile markup, and the footer branding logo.
pub fn build_page(
    template: &str,
    svg: &str,
    map: &SectionMap,
    resolver: &LogoResolver,
    branding: Option<&LogoData>,
) -> Result<String> {
    let section_json = serde_json::to_string_pretty(&section_data(map, resolver))?;
    let branding_uri = branding.map(LogoData::data_uri).unwrap_or_default();
    Ok(template
        .replacen(SECTION_DATA_PLACEHOLDER, &section_json, 1)
        .replacen(SVG_CONTENT_PLACEHOLDER, svg, 1)
        .replacen(MOBILE_SECTIONS_PLACEHOLDER, &mobile_sections(map, resolver), 1)
        .replacen(FOOTER_LOGO_PLACEHOLDER, &branding_uri, 1))
}

pub fn write_page(page: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, page).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// The grouped catalog as the page script consumes it: section name to
/// subcategory buckets to entity objects, logos inlined as data URIs.
fn section_data(map: &SectionMap, resolver: &LogoResolver) -> serde_json::Value {
    let mut sections = serde_json::Map::new();
    for section in &map.sections {
        let mut subcategories = serde_json::Map::new();
        for sub in &section.subcategories {
            let items: Vec<serde_json::Value> = sub
                .items
                .iter()
                .map(|record| {
                    json!({
                        "entity": record.name,
                        "role": record.role,
                        "tier": record.tier,
                        "status": record.status,
                        "website": record.website,
                        "logoDataUri": resolver.data_uri(&record.name).unwrap_or_default(),
                    })
                })
                .collect();
            subcategories.insert(sub.name.clone(), serde_json::Value::Array(items));
        }
        sections.insert(
            section.name.clone(),
            json!({ "subcategories": subcategories }),
        );
    }
    serde_json::Value::Object(sections)
}

fn mobile_sections(map: &SectionMap, resolver: &LogoResolver) -> String {
    let mut html = String::new();
    for name in MOBILE_ORDER {
        let Some(entries) = map.section(name) else {
            continue;
        };
        if entries.is_empty() {
            continue;
        }

        let section_class = match *name {
            "Hedera Council" => "mobile-section council",
            "Independent Core Organizations" => "mobile-section core-orgs",
            "Native Services" => "mobile-section native-services",
            _ => "mobile-section",
        };
        let _ = write!(html, "    <div class=\"{section_class}\">\n");
        let _ = write!(
            html,
            "      <h2 class=\"mobile-section-title\">{}</h2>\n",
            escape_html(name)
        );
        html.push_str("      <div class=\"mobile-logos\">\n");

        match *name {
            "Native Services" => {
                for record in entries.items() {
                    let label = roster::service_label(&record.name);
                    let _ = write!(
                        html,
                        "        <a class=\"mobile-native-service\" {}>\n",
                        link_attrs(&record.website)
                    );
                    let _ = write!(
                        html,
                        "          <span class=\"mobile-native-abbrev\">{}</span>\n",
                        escape_html(&label.abbrev)
                    );
                    let _ = write!(
                        html,
                        "          <span class=\"mobile-native-name\">{}</span>\n",
                        escape_html(&label.short_name)
                    );
                    html.push_str("        </a>\n");
                }
            }
            "Hedera Council" => {
                for record in entries.items() {
                    // Shrunk wordmarks keep their desktop factor; the rest
                    // render 75% larger than the 45px base.
                    let scale = match roster::council_scale(&record.name) {
                        s if s < 1.0 => s,
                        _ => 1.75,
                    };
                    mobile_logo(&mut html, record, resolver, 45.0 * scale);
                }
            }
            "Independent Core Organizations" => {
                for record in entries.items() {
                    let height = match roster::core_org_height(&record.name) {
                        h if h != roster::CORE_ORG_DEFAULT_HEIGHT => h,
                        _ => 35.0,
                    };
                    mobile_logo(&mut html, record, resolver, height);
                }
            }
            _ => {
                for record in entries.items() {
                    let _ = write!(
                        html,
                        "        <a class=\"mobile-logo\" {}>\n",
                        link_attrs(&record.website)
                    );
                    match resolver.data_uri(&record.name) {
                        Some(uri) => {
                            let _ = write!(
                                html,
                                "          <img class=\"mobile-logo-img\" src=\"{uri}\" alt=\"{}\">\n",
                                escape_html(&record.name)
                            );
                        }
                        None => {
                            let _ = write!(
                                html,
                                "          <div class=\"mobile-logo-placeholder\">{}</div>\n",
                                escape_html(&text::monogram(&record.name))
                            );
                        }
                    }
                    let _ = write!(
                        html,
                        "          <span class=\"mobile-logo-name\">{}</span>\n",
                        escape_html(&record.name)
                    );
                    html.push_str("        </a>\n");
                }
            }
        }

        html.push_str("      </div>\n");
        html.push_str("    </div>\n");
    }
    html
}

fn mobile_logo(
    html: &mut String,
    record: &crate::catalog::EntityRecord,
    resolver: &LogoResolver,
    height: f32,
) {
    let _ = write!(
        html,
        "        <a class=\"mobile-logo\" {}>\n",
        link_attrs(&record.website)
    );
    match resolver.data_uri(&record.name) {
        Some(uri) => {
            let _ = write!(
                html,
                "          <img class=\"mobile-logo-img\" src=\"{uri}\" alt=\"{}\" \
                 style=\"height: {height}px;\">\n",
                escape_html(&record.name)
            );
        }
        None => {
            let _ = write!(
                html,
                "          <div class=\"mobile-logo-placeholder\" style=\"height: {height}px;\">{}</div>\n",
                escape_html(&text::monogram(&record.name))
            );
        }
    }
    let _ = write!(
        html,
        "          <span class=\"mobile-logo-name\">{}</span>\n",
        escape_html(&record.name)
    );
    html.push_str("        </a>\n");
}

fn link_attrs(website: &str) -> String {
    if website.trim().is_empty() {
        String::new()
    } else {
        format!(
            "href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"",
            escape_html(website)
        )
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityRecord;
    use crate::taxonomy::{Taxonomy, group_records};

    fn record(name: &str, raw: &str, role: &str, website: &str) -> EntityRecord {
        EntityRecord {
            name: name.to_string(),
            raw_category: raw.to_string(),
            role: role.to_string(),
            tier: String::new(),
            status: String::new(),
            website: website.to_string(),
        }
    }

    fn sample_map() -> SectionMap {
        group_records(
            Taxonomy::hedera(),
            &[
                record("Chainlink", "Oracles", "Oracle", "https://chain.link"),
                record("Google", "Hedera Council", "Council Member", ""),
                record("GBBC", "Hedera Council", "Council Member", ""),
                record("Hashgraph", "Independent Core Organizations", "Core Organization", ""),
                record("Hedera Token Service", "Native Services", "Native Service", ""),
            ],
        )
    }

    const TEMPLATE: &str = "<html><script>var data = SECTION_DATA_PLACEHOLDER;</script>\
        <div id=\"map\">SVG_CONTENT_PLACEHOLDER</div>\
        <div id=\"mobile\">MOBILE_SECTIONS_PLACEHOLDER</div>\
        <img src=\"FOOTER_LOGO_PLACEHOLDER\"></html>";

    #[test]
    fn fills_all_placeholders() {
        let resolver = LogoResolver::new("/nonexistent");
        let page = build_page(TEMPLATE, "<svg>map</svg>", &sample_map(), &resolver, None).unwrap();
        assert!(!page.contains("PLACEHOLDER"));
        assert!(page.contains("<svg>map</svg>"));
        assert!(page.contains("\"entity\": \"Chainlink\""));
        assert!(page.contains("\"website\": \"https://chain.link\""));
    }

    #[test]
    fn section_data_has_subcategory_buckets() {
        let resolver = LogoResolver::new("/nonexistent");
        let data = section_data(&sample_map(), &resolver);
        let oracle = &data["Oracles"]["subcategories"]["Oracle"];
        assert_eq!(oracle.as_array().unwrap().len(), 1);
        assert_eq!(oracle[0]["entity"], "Chainlink");
        assert_eq!(oracle[0]["logoDataUri"], "");
        // Every configured section appears even when empty.
        assert!(data["Wallets"]["subcategories"]["Wallet"].as_array().unwrap().is_empty());
    }

    #[test]
    fn mobile_rosters_lead_and_use_special_markup() {
        let resolver = LogoResolver::new("/nonexistent");
        let html = mobile_sections(&sample_map(), &resolver);
        let core = html.find("core-orgs").unwrap();
        let council = html.find("mobile-section council").unwrap();
        let oracles = html.find(">Oracles</h2>").unwrap();
        assert!(core < council && council < oracles);
        assert!(html.contains("mobile-native-abbrev\">HTS<"));
        assert!(html.contains("mobile-native-name\">Token Service<"));
    }

    #[test]
    fn mobile_council_heights_respect_shrink_factors() {
        let resolver = LogoResolver::new("/nonexistent");
        let html = mobile_sections(&sample_map(), &resolver);
        // Google: 45 * 1.75; GBBC keeps its 0.6 shrink.
        assert!(html.contains("height: 78.75px"));
        assert!(html.contains("height: 27px"));
    }

    #[test]
    fn empty_sections_are_omitted_from_mobile() {
        let resolver = LogoResolver::new("/nonexistent");
        let html = mobile_sections(&sample_map(), &resolver);
        assert!(!html.contains(">Wallets</h2>"));
    }

    #[test]
    fn entity_names_are_escaped() {
        let map = group_records(
            Taxonomy::hedera(),
            &[record("A&B <Co>", "Oracles", "Oracle", "")],
        );
        let resolver = LogoResolver::new("/nonexistent");
        let html = mobile_sections(&map, &resolver);
        assert!(html.contains("A&amp;B &lt;Co&gt;"));
    }
}
