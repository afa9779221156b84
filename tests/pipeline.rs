use std::path::{Path, PathBuf};

use ecomap::config::Config;
use ecomap::html::build_page;
use ecomap::logo::{self, LogoResolver};
use ecomap::render::render_svg;
use ecomap::{Taxonomy, group_records};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_map() -> ecomap::SectionMap {
    let records = ecomap::catalog::read_catalog(&fixtures().join("catalog.csv")).unwrap();
    group_records(Taxonomy::hedera(), &records)
}

#[test]
fn catalog_rows_land_in_their_sections() {
    let map = load_map();
    let oracles = map.section("Oracles").unwrap();
    let names: Vec<&str> = oracles.items().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Chainlink", "Pyth"]);

    let defi = map.section("DeFi").unwrap();
    assert_eq!(defi.items().count(), 2);

    // The Metaverse row has no configured mapping and is dropped, counted.
    assert_eq!(map.dropped, 1);
    assert!(map.sections.iter().all(|s| s
        .items()
        .all(|r| r.name != "Mystery Project")));
}

#[test]
fn rendered_svg_is_a_complete_document() {
    let map = load_map();
    let config = Config::default();
    let resolver = LogoResolver::new(fixtures().join("logos"));
    let css = std::fs::read_to_string(fixtures().join("theme.css")).unwrap();

    let svg = render_svg(&map, &config, &resolver, &css, None);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("viewBox=\"0 0 1920 1080\""));
    assert!(svg.contains(&css));

    // Chainlink has a fixture logo and gets an embedded image; Pyth falls
    // back to its monogram.
    assert!(svg.contains("data:image/svg+xml;base64,"));
    assert!(svg.contains(">PY</text>"));

    // Every configured section gets a panel group.
    for section in Taxonomy::hedera().sections() {
        assert!(
            svg.contains(&format!("data-section=\"{}\"", section.name)),
            "missing panel for {}",
            section.name
        );
    }
}

#[test]
fn page_template_is_fully_substituted() {
    let map = load_map();
    let config = Config::default();
    let resolver = LogoResolver::new(fixtures().join("logos"));
    let svg = render_svg(&map, &config, &resolver, "", None);
    let template = std::fs::read_to_string(fixtures().join("template.html")).unwrap();
    let branding = logo::load_file(&fixtures().join("logos/branding/genfinity-logo.svg"));
    assert!(branding.is_some());

    let page = build_page(&template, &svg, &map, &resolver, branding.as_ref()).unwrap();
    assert!(!page.contains("PLACEHOLDER"));
    assert!(page.contains("const sectionData = {"));
    assert!(page.contains("\"entity\": \"Chainlink\""));
    assert!(page.contains("src=\"data:image/svg+xml;base64,"));

    // Mobile markup leads with the rosters and keeps roster-specific markup.
    assert!(page.contains("mobile-section core-orgs"));
    assert!(page.contains("mobile-native-abbrev\">HTS<"));
    let core = page.find("core-orgs").unwrap();
    let oracles = page.find(">Oracles</h2>").unwrap();
    assert!(core < oracles);
}

#[test]
fn rendering_is_deterministic() {
    let map = load_map();
    let config = Config::default();
    let resolver = LogoResolver::new(fixtures().join("logos"));
    let first = render_svg(&map, &config, &resolver, "", None);
    let second = render_svg(&map, &config, &resolver, "", None);
    assert_eq!(first, second);
}
