//! Hand-tuned layouts for the three fixed roster panels. These rosters are
//! small and visually bespoke; their per-entity size tables are static
//! presentation data, deliberately kept out of the generic grid packer.

use super::PanelBounds;

#[derive(Debug, Clone, PartialEq)]
pub struct RosterItem {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// Council logo aspect ratios (width / height).
const COUNCIL_ASPECTS: &[(&str, f32)] = &[
    ("Google", 1.67),
    ("IBM", 1.67),
    ("Boeing", 4.3),
    ("Deutsche Telekom", 1.67),
    ("LG Electronics", 1.67),
    ("Nomura", 1.67),
    ("Ubisoft", 1.67),
    ("UCL", 1.0),
    ("Shinhan Bank", 1.67),
    ("Dell", 2.18),
    ("DLA Piper", 1.67),
    ("EDF", 1.67),
    ("eftpos", 1.0),
    ("Hitachi", 1.67),
    ("Mondelez", 1.67),
    ("ServiceNow", 1.67),
    ("Swirlds Labs", 1.67),
    ("Tata Communications", 1.67),
    ("Worldpay", 3.71),
    ("Zain Group", 1.67),
    ("LSE", 1.67),
    ("abrdn", 1.67),
    ("Arrow", 1.67),
    ("Cofra", 1.67),
    ("Dentons", 1.67),
    ("IIT Madras", 1.67),
    ("Magalu", 1.67),
    ("Repsol", 4.27),
    ("Blockchain for Energy", 2.23),
    ("GBBC", 1.67),
];

// A few wide or busy marks render smaller than their aspect would give.
const COUNCIL_SHRINK: &[(&str, f32)] = &[
    ("GBBC", 0.6),
    ("Repsol", 0.5),
    ("Boeing", 0.5),
    ("Worldpay", 0.5),
];

pub const COUNCIL_FALLBACK_ASPECT: f32 = 2.5;
pub const COUNCIL_NORMAL_COLS: usize = 2;
pub const COUNCIL_NORMAL_BASE_HEIGHT: f32 = 50.0;
pub const COUNCIL_HOVER_COLS: usize = 5;
pub const COUNCIL_HOVER_BASE_HEIGHT: f32 = 100.0;
pub const COUNCIL_HOVER_CELL_WIDTH: f32 = 200.0;
pub const COUNCIL_INNER_PAD: f32 = 8.0;

pub fn council_aspect(entity: &str) -> f32 {
    lookup(COUNCIL_ASPECTS, entity).unwrap_or(COUNCIL_FALLBACK_ASPECT)
}

pub fn council_scale(entity: &str) -> f32 {
    lookup(COUNCIL_SHRINK, entity).unwrap_or(1.0)
}

/// Pack council logos into an even `cols`-column grid at a common base
/// height, honoring each entity's aspect ratio and shrink factor, with
/// width capped to the cell interior.
pub fn council_layout(
    names: &[&str],
    bounds: PanelBounds,
    cols: usize,
    base_height: f32,
) -> Vec<RosterItem> {
    if names.is_empty() || cols == 0 {
        return Vec::new();
    }
    let avail_w = bounds.width - COUNCIL_INNER_PAD * 2.0;
    let avail_h = bounds.height - COUNCIL_INNER_PAD * 2.0;
    let rows = names.len().div_ceil(cols);
    let cell_w = avail_w / cols as f32;
    let cell_h = avail_h / rows as f32;
    let start_x = bounds.x + COUNCIL_INNER_PAD;
    let start_y = bounds.y + COUNCIL_INNER_PAD;

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let aspect = council_aspect(name);
            let scale = council_scale(name);
            let mut height = base_height * scale;
            let mut width = height * aspect;
            if width > cell_w - 8.0 {
                width = cell_w - 8.0;
                height = width / aspect;
            }
            let row = index / cols;
            let col = index % cols;
            RosterItem {
                index,
                x: start_x + col as f32 * cell_w + (cell_w - width) / 2.0,
                y: start_y + row as f32 * cell_h + (cell_h - height) / 2.0,
                width,
                height,
            }
        })
        .collect()
}

// Core organization wordmarks: per-entity heights tuned so the marks read
// at the same visual weight, a shared aspect ratio, and small vertical
// nudges.
const CORE_ORG_HEIGHTS: &[(&str, f32)] = &[
    ("Hashgraph", 31.0),
    ("Hedera Council", 99.0),
    ("Hedera Foundation", 112.0),
    ("The Hashgraph Association", 42.0),
    ("Exponential Science", 70.0),
];

const CORE_ORG_Y_NUDGES: &[(&str, f32)] = &[
    ("Hashgraph", 10.0),
    ("Hedera Council", 20.0),
    ("Hedera Foundation", -10.0),
    ("The Hashgraph Association", -10.0),
];

pub const CORE_ORG_DEFAULT_HEIGHT: f32 = 55.0;
pub const CORE_ORG_ASPECT: f32 = 3.7;
pub const CORE_ORG_GAP: f32 = 35.0;

// Entities whose roster rendering uses the full-size wordmark asset
// rather than the circular mark.
const FULL_LOGO_ALIASES: &[&str] = &[
    "Hashgraph",
    "Hedera Foundation",
    "The Hashgraph Association",
    "Exponential Science",
];

pub fn full_logo_key(entity: &str) -> String {
    if FULL_LOGO_ALIASES.contains(&entity) {
        format!("{entity} Full")
    } else {
        entity.to_string()
    }
}

pub fn core_org_height(entity: &str) -> f32 {
    lookup(CORE_ORG_HEIGHTS, entity).unwrap_or(CORE_ORG_DEFAULT_HEIGHT)
}

/// Stack the core-organization wordmarks vertically, centered both ways
/// in the strip.
pub fn core_org_layout(names: &[&str], bounds: PanelBounds) -> Vec<RosterItem> {
    if names.is_empty() {
        return Vec::new();
    }
    let total_height: f32 = names.iter().map(|n| core_org_height(n)).sum::<f32>()
        + (names.len() as f32 - 1.0) * CORE_ORG_GAP;
    let mut cursor_y = bounds.y + (bounds.height - total_height) / 2.0;

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let height = core_org_height(name);
            let width = height * CORE_ORG_ASPECT;
            let nudge = lookup(CORE_ORG_Y_NUDGES, name).unwrap_or(0.0);
            let item = RosterItem {
                index,
                x: bounds.x + (bounds.width - width) / 2.0,
                y: cursor_y + nudge,
                width,
                height,
            };
            cursor_y += height + CORE_ORG_GAP;
            item
        })
        .collect()
}

/// Display data for one native service: the big abbreviation plus the
/// two-line full name under it, and the short name the mobile page uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLabel {
    pub abbrev: String,
    pub line1: String,
    pub line2: String,
    pub short_name: String,
}

const SERVICES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Hedera Token Service",
        "HTS",
        "Hedera Token",
        "Service",
        "Token Service",
    ),
    (
        "Hedera Consensus Service",
        "HCS",
        "Hedera Consensus",
        "Service",
        "Consensus Service",
    ),
    (
        "Hedera Smart Contract Service",
        "HSCS",
        "Hedera Smart Contract",
        "Service",
        "Smart Contract",
    ),
];

pub fn service_label(entity: &str) -> ServiceLabel {
    for (name, abbrev, line1, line2, short_name) in SERVICES {
        if *name == entity {
            return ServiceLabel {
                abbrev: (*abbrev).to_string(),
                line1: (*line1).to_string(),
                line2: (*line2).to_string(),
                short_name: (*short_name).to_string(),
            };
        }
    }
    ServiceLabel {
        abbrev: entity.chars().take(3).collect::<String>().to_uppercase(),
        line1: entity.to_string(),
        line2: String::new(),
        short_name: entity.to_string(),
    }
}

pub const SERVICE_ITEM_HEIGHT: f32 = 55.0;
pub const SERVICE_ITEM_GAP: f32 = 25.0;

/// Baseline Y for each native-service text block, vertically centered in
/// the strip.
pub fn native_service_baselines(count: usize, bounds: PanelBounds) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let total = count as f32 * SERVICE_ITEM_HEIGHT + (count as f32 - 1.0) * SERVICE_ITEM_GAP;
    let start = bounds.center_y() - total / 2.0 + 10.0;
    let stride = SERVICE_ITEM_HEIGHT + SERVICE_ITEM_GAP;
    (0..count).map(|i| start + i as f32 * stride).collect()
}

fn lookup(table: &[(&str, f32)], key: &str) -> Option<f32> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}
