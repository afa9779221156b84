pub mod grid;
pub mod roster;

use crate::config::CanvasConfig;

/// A panel's rectangle in output-canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// How a panel lays out its items. The three roster variants are small,
/// fixed, visually bespoke panels with hand-tuned per-entity tables; the
/// generic grid algorithm never sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Generic,
    CouncilRoster,
    CoreOrgRoster,
    NativeServiceRoster,
}

#[derive(Debug, Clone)]
pub struct PanelSpec {
    pub section: String,
    pub bounds: PanelBounds,
    pub kind: PanelKind,
}

// Left-area rows: (section, proportional width share). A `None` share
// takes whatever width remains after the sized panels and gaps.
const ROW_SHARES: [&[(&str, Option<f32>)]; 4] = [
    &[
        ("Wallets", Some(0.22)),
        ("Custodians", Some(0.12)),
        ("Exchanges", None),
    ],
    &[
        ("Oracles", Some(0.08)),
        ("Bridges and Interoperability", Some(0.16)),
        ("Services", Some(0.32)),
        ("Onramps", Some(0.14)),
        ("Implementation Partners", None),
    ],
    &[
        ("Advisory Firms", Some(0.07)),
        ("Risk and Compliance", Some(0.17)),
        ("Stablecoin Infrastructure", Some(0.10)),
        ("Tooling and Solutions", Some(0.31)),
        ("Meme Tokens", None),
    ],
    &[
        ("DeFi", Some(0.30)),
        ("NFT Markets", Some(0.10)),
        ("Gaming & ENT", Some(0.28)),
        ("Real World Assets", None),
    ],
];

/// Compute the fixed panel arrangement: four rows of generic panels on the
/// left, and on the right a full-height council strip next to the core-org
/// strip stacked above native services.
pub fn plan_panels(canvas: &CanvasConfig) -> Vec<PanelSpec> {
    let gap = canvas.gap;
    let right_section_w = canvas.council_width + canvas.core_orgs_width + gap;
    let left_area_w = canvas.width - canvas.panel_margin * 2.0 - right_section_w - gap;

    let available_height = canvas.height - canvas.content_y - canvas.footer_space;
    let row_h = ((available_height - canvas.row_gap * 3.0) / 4.0).floor();

    let mut panels = Vec::new();
    let mut row_y = canvas.content_y;
    for row in ROW_SHARES {
        let sized: f32 = row
            .iter()
            .filter_map(|(_, share)| share.map(|s| (left_area_w * s).floor()))
            .sum();
        let gaps = gap * (row.len() as f32 - 1.0);
        let remainder = left_area_w - sized - gaps;

        let mut x = canvas.panel_margin;
        for (section, share) in row {
            let width = match share {
                Some(share) => (left_area_w * share).floor(),
                None => remainder,
            };
            panels.push(PanelSpec {
                section: section.to_string(),
                bounds: PanelBounds::new(x, row_y, width, row_h),
                kind: PanelKind::Generic,
            });
            x += width + gap;
        }
        row_y += row_h + canvas.row_gap;
    }

    let right_x = canvas.width - canvas.panel_margin - right_section_w;
    let council_h = available_height;
    let core_orgs_h = (council_h - canvas.row_gap) * 0.65;
    let native_h = council_h - core_orgs_h - canvas.row_gap;

    panels.push(PanelSpec {
        section: "Hedera Council".to_string(),
        bounds: PanelBounds::new(right_x, canvas.content_y, canvas.council_width, council_h),
        kind: PanelKind::CouncilRoster,
    });
    panels.push(PanelSpec {
        section: "Independent Core Organizations".to_string(),
        bounds: PanelBounds::new(
            right_x + canvas.council_width + gap,
            canvas.content_y,
            canvas.core_orgs_width,
            core_orgs_h,
        ),
        kind: PanelKind::CoreOrgRoster,
    });
    panels.push(PanelSpec {
        section: "Native Services".to_string(),
        bounds: PanelBounds::new(
            right_x + canvas.council_width + gap,
            canvas.content_y + core_orgs_h + canvas.row_gap,
            canvas.core_orgs_width,
            native_h,
        ),
        kind: PanelKind::NativeServiceRoster,
    });

    panels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_all_twenty_sections() {
        let panels = plan_panels(&CanvasConfig::default());
        assert_eq!(panels.len(), 20);
        assert_eq!(
            panels
                .iter()
                .filter(|p| p.kind != PanelKind::Generic)
                .count(),
            3
        );
    }

    #[test]
    fn rows_do_not_overlap_and_stay_inside_the_canvas() {
        let canvas = CanvasConfig::default();
        let panels = plan_panels(&canvas);
        for a in &panels {
            assert!(a.bounds.x >= canvas.panel_margin - 0.5);
            assert!(a.bounds.right() <= canvas.width - canvas.panel_margin + 0.5);
            assert!(a.bounds.bottom() <= canvas.height - canvas.footer_space + 0.5);
            for b in &panels {
                if std::ptr::eq(a, b) {
                    continue;
                }
                let disjoint = a.bounds.right() <= b.bounds.x
                    || b.bounds.right() <= a.bounds.x
                    || a.bounds.bottom() <= b.bounds.y
                    || b.bounds.bottom() <= a.bounds.y;
                assert!(disjoint, "{} overlaps {}", a.section, b.section);
            }
        }
    }

    #[test]
    fn remainder_panels_absorb_leftover_row_width() {
        let canvas = CanvasConfig::default();
        let panels = plan_panels(&canvas);
        let wallets = panels.iter().find(|p| p.section == "Wallets").unwrap();
        let exchanges = panels.iter().find(|p| p.section == "Exchanges").unwrap();
        let right_section_w = canvas.council_width + canvas.core_orgs_width + canvas.gap;
        let left_area_w = canvas.width - canvas.panel_margin * 2.0 - right_section_w - canvas.gap;
        assert_eq!(
            exchanges.bounds.right(),
            wallets.bounds.x + left_area_w,
        );
    }

    #[test]
    fn council_strip_spans_the_full_content_height() {
        let canvas = CanvasConfig::default();
        let panels = plan_panels(&canvas);
        let council = panels
            .iter()
            .find(|p| p.kind == PanelKind::CouncilRoster)
            .unwrap();
        assert_eq!(council.bounds.y, canvas.content_y);
        assert_eq!(
            council.bounds.height,
            canvas.height - canvas.content_y - canvas.footer_space
        );
    }
}
