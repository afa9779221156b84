use crate::config::{CanvasConfig, Config};
use crate::layout::{PanelBounds, PanelKind, PanelSpec, grid, plan_panels, roster};
use crate::logo::{LogoData, LogoResolver};
use crate::taxonomy::{SectionEntries, SectionMap};
use crate::text;
use crate::theme::Theme;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Cap on how far a panel may grow on hover relative to its normal size.
const MAX_HOVER_SCALE: f32 = 1.8;

pub fn render_svg(
    map: &SectionMap,
    config: &Config,
    resolver: &LogoResolver,
    css: &str,
    branding: Option<&LogoData>,
) -> String {
    let canvas = &config.canvas;
    let theme = &config.theme;
    let mut body = String::new();
    let mut clip_defs = String::new();

    let _ = write!(
        body,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        canvas.width, canvas.height, theme.background
    );
    let _ = write!(
        body,
        "<text class=\"header-title\" x=\"40\" y=\"50\" font-size=\"{}px\">{}</text>",
        theme.header_size,
        escape_xml(&canvas.title)
    );

    for panel in plan_panels(canvas) {
        let Some(entries) = map.section(&panel.section) else {
            continue;
        };
        render_panel(
            &mut body,
            &mut clip_defs,
            &panel,
            entries,
            canvas,
            theme,
            resolver,
        );
    }

    render_footer(&mut body, canvas, theme, branding, &config.paths.branding_url);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = canvas.width,
        h = canvas.height
    );
    let _ = write!(
        svg,
        "<defs><style type=\"text/css\">{css}</style>{clip_defs}</defs>"
    );
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn render_panel(
    body: &mut String,
    clip_defs: &mut String,
    panel: &PanelSpec,
    entries: &SectionEntries,
    canvas: &CanvasConfig,
    theme: &Theme,
    resolver: &LogoResolver,
) {
    let bounds = panel.bounds;

    // Hover growth anchors away from canvas center and is clipped to the
    // content area boundaries.
    let left_boundary = canvas.panel_margin;
    let right_boundary = canvas.width - canvas.panel_margin;
    let top_boundary = canvas.content_y - 15.0;
    let bottom_boundary = canvas.height - canvas.footer_space + 10.0;

    let origin_x = if bounds.center_x() < canvas.width / 2.0 {
        bounds.x
    } else {
        bounds.right()
    };
    let origin_y = if bounds.center_y() < canvas.height / 2.0 {
        bounds.y
    } else {
        bounds.bottom()
    };
    let max_scale_x = if origin_x == bounds.x {
        (right_boundary - bounds.x) / bounds.width
    } else {
        (bounds.right() - left_boundary) / bounds.width
    };
    let max_scale_y = if origin_y == bounds.y {
        (bottom_boundary - bounds.y) / bounds.height
    } else {
        (bounds.bottom() - top_boundary) / bounds.height
    };
    let max_scale = max_scale_x.min(max_scale_y).min(MAX_HOVER_SCALE);

    let class = if panel.kind == PanelKind::CouncilRoster {
        "section-group council-section"
    } else {
        "section-group"
    };
    let _ = write!(
        body,
        "<g class=\"{class}\" data-section=\"{}\" data-max-scale=\"{max_scale:.2}\" \
         style=\"transform-origin: {origin_x}px {origin_y}px\">",
        escape_xml(&panel.section)
    );
    let _ = write!(
        body,
        "<rect class=\"panel\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"12\"/>",
        bounds.x, bounds.y, bounds.width, bounds.height
    );

    match panel.kind {
        PanelKind::Generic => {
            render_grid_panel(body, clip_defs, panel, entries, canvas, theme, resolver)
        }
        PanelKind::CouncilRoster => render_council_panel(body, panel, entries, theme, resolver),
        PanelKind::CoreOrgRoster => render_core_org_panel(body, entries, bounds, theme, resolver),
        PanelKind::NativeServiceRoster => render_native_panel(body, entries, bounds, theme),
    }

    // Title sits above the box and is drawn last so it stays on top.
    let _ = write!(
        body,
        "<text class=\"section-title\" x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}px\" \
         data-section=\"{}\">{}</text>",
        bounds.x + 3.0,
        bounds.y - 5.0,
        theme.section_title_size,
        escape_xml(&panel.section),
        escape_xml(&panel.section)
    );
    body.push_str("</g>");
}

fn render_grid_panel(
    body: &mut String,
    clip_defs: &mut String,
    panel: &PanelSpec,
    entries: &SectionEntries,
    canvas: &CanvasConfig,
    theme: &Theme,
    resolver: &LogoResolver,
) {
    let items = entries.sorted_items();
    let layout = grid::pack(items.len(), panel.bounds, grid::GridOptions::from_canvas(canvas));

    for placed in &layout.items {
        let record = items[placed.index];
        let icon = placed.icon_size;
        let logo_x = placed.cell_center_x - icon / 2.0;
        let logo_y = placed.cell_center_y - layout.cell_height / 2.0 + 5.0;

        let link = open_link(body, &record.website);

        match resolver.load(&record.name) {
            Some(logo) => {
                let clip_id = sanitize_id(&format!("clip-{}-{}", panel.section, placed.index));
                let _ = write!(
                    clip_defs,
                    "<clipPath id=\"{clip_id}\"><circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/></clipPath>",
                    logo_x + icon / 2.0,
                    logo_y + icon / 2.0,
                    icon / 2.0
                );
                let _ = write!(
                    body,
                    "<circle class=\"logo-circle\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>",
                    logo_x + icon / 2.0,
                    logo_y + icon / 2.0,
                    icon / 2.0
                );
                let _ = write!(
                    body,
                    "<image x=\"{logo_x:.2}\" y=\"{logo_y:.2}\" width=\"{icon:.2}\" height=\"{icon:.2}\" \
                     href=\"{}\" clip-path=\"url(#{clip_id})\" preserveAspectRatio=\"xMidYMid slice\"/>",
                    logo.data_uri()
                );
            }
            None => {
                let _ = write!(
                    body,
                    "<circle class=\"logo-circle\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"/>",
                    logo_x + icon / 2.0,
                    logo_y + icon / 2.0,
                    icon / 2.0
                );
                let _ = write!(
                    body,
                    "<text class=\"logo-text\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" \
                     font-size=\"{}px\">{}</text>",
                    logo_x + icon / 2.0,
                    logo_y + icon / 2.0 + 5.0,
                    theme.monogram_size,
                    escape_xml(&text::monogram(&record.name))
                );
            }
        }

        if placed.show_label {
            let label_y = logo_y + icon + 14.0;
            for (line_idx, line) in text::wrap_label(&record.name, 12).iter().enumerate() {
                let text_y = label_y + line_idx as f32 * 8.0;
                if text_y < panel.bounds.bottom() - 2.0 {
                    let _ = write!(
                        body,
                        "<text class=\"logo-label\" x=\"{:.2}\" y=\"{text_y:.2}\" \
                         text-anchor=\"middle\" font-size=\"{}px\">{}</text>",
                        placed.cell_center_x,
                        theme.label_size,
                        escape_xml(line)
                    );
                }
            }
        }

        close_link(body, link);
    }
}

fn render_council_logos(
    body: &mut String,
    items: &[&crate::catalog::EntityRecord],
    bounds: PanelBounds,
    cols: usize,
    base_height: f32,
    draw_panel: bool,
    theme: &Theme,
    resolver: &LogoResolver,
) {
    if draw_panel {
        let _ = write!(
            body,
            "<rect class=\"panel\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"12\"/>",
            bounds.x, bounds.y, bounds.width, bounds.height
        );
    }
    let names: Vec<&str> = items.iter().map(|r| r.name.as_str()).collect();
    for placed in roster::council_layout(&names, bounds, cols, base_height) {
        let record = items[placed.index];
        let link = open_link(body, &record.website);
        match resolver.load(&record.name) {
            Some(logo) => {
                let _ = write!(
                    body,
                    "<image x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" href=\"{}\" \
                     preserveAspectRatio=\"xMidYMid meet\"/>",
                    placed.x,
                    placed.y,
                    placed.width,
                    placed.height,
                    logo.data_uri()
                );
            }
            None => {
                let _ = write!(
                    body,
                    "<text class=\"council-logo-text\" x=\"{:.2}\" y=\"{:.2}\" \
                     text-anchor=\"middle\" font-size=\"{}px\">{}</text>",
                    placed.x + placed.width / 2.0,
                    placed.y + placed.height / 2.0 + 3.0,
                    theme.roster_text_size,
                    escape_xml(&record.name)
                );
            }
        }
        close_link(body, link);
    }
}

fn render_council_panel(
    body: &mut String,
    panel: &PanelSpec,
    entries: &SectionEntries,
    theme: &Theme,
    resolver: &LogoResolver,
) {
    let items = entries.sorted_items();
    let bounds = panel.bounds;

    // Normal state: two columns inside the original strip.
    body.push_str("<g class=\"council-normal\">");
    render_council_logos(
        body,
        &items,
        bounds,
        roster::COUNCIL_NORMAL_COLS,
        roster::COUNCIL_NORMAL_BASE_HEIGHT,
        false,
        theme,
        resolver,
    );
    body.push_str("</g>");

    // Hover state: five columns of doubled logos in a panel grown
    // leftward from the strip's right edge; the page CSS animates between
    // the two using the precomputed scale ratio.
    let hover_w = roster::COUNCIL_HOVER_COLS as f32 * roster::COUNCIL_HOVER_CELL_WIDTH
        + roster::COUNCIL_INNER_PAD * 2.0;
    let hover_bounds = PanelBounds::new(bounds.right() - hover_w, bounds.y, hover_w, bounds.height);
    let scale_ratio = bounds.width / hover_w;

    let _ = write!(
        body,
        "<g class=\"council-hover\" data-scale-ratio=\"{scale_ratio:.3}\" \
         style=\"transform: scale({scale_ratio:.3}); transform-origin: {:.2}px {:.2}px\">",
        bounds.right(),
        bounds.center_y()
    );
    render_council_logos(
        body,
        &items,
        hover_bounds,
        roster::COUNCIL_HOVER_COLS,
        roster::COUNCIL_HOVER_BASE_HEIGHT,
        true,
        theme,
        resolver,
    );
    let _ = write!(
        body,
        "<text class=\"section-title council-hover-title\" x=\"{:.2}\" y=\"{:.2}\" \
         style=\"font-size: {}px\" data-section=\"{}\">{}</text>",
        hover_bounds.x + 3.0,
        hover_bounds.y - 9.0,
        theme.header_size,
        escape_xml(&panel.section),
        escape_xml(&panel.section)
    );
    body.push_str("</g>");
}

fn render_core_org_panel(
    body: &mut String,
    entries: &SectionEntries,
    bounds: PanelBounds,
    theme: &Theme,
    resolver: &LogoResolver,
) {
    let items: Vec<&crate::catalog::EntityRecord> = entries.items().collect();
    let names: Vec<&str> = items.iter().map(|r| r.name.as_str()).collect();
    for placed in roster::core_org_layout(&names, bounds) {
        let record = items[placed.index];
        let link = open_link(body, &record.website);
        match resolver.load(&roster::full_logo_key(&record.name)) {
            Some(logo) => {
                let _ = write!(
                    body,
                    "<image x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" href=\"{}\" \
                     preserveAspectRatio=\"xMidYMid meet\"/>",
                    placed.x,
                    placed.y,
                    placed.width,
                    placed.height,
                    logo.data_uri()
                );
            }
            None => {
                let _ = write!(
                    body,
                    "<text class=\"council-logo-text\" x=\"{:.2}\" y=\"{:.2}\" \
                     text-anchor=\"middle\" font-size=\"{}px\">{}</text>",
                    placed.x + placed.width / 2.0,
                    placed.y + placed.height / 2.0 + 3.0,
                    theme.roster_text_size + 1.0,
                    escape_xml(&record.name)
                );
            }
        }
        close_link(body, link);
    }
}

fn render_native_panel(
    body: &mut String,
    entries: &SectionEntries,
    bounds: PanelBounds,
    theme: &Theme,
) {
    let items: Vec<&crate::catalog::EntityRecord> = entries.items().collect();
    let baselines = roster::native_service_baselines(items.len(), bounds);
    for (record, item_y) in items.iter().zip(baselines) {
        let label = roster::service_label(&record.name);
        let link = open_link(body, &record.website);
        let center_x = bounds.center_x();
        let _ = write!(
            body,
            "<text x=\"{center_x:.2}\" y=\"{item_y:.2}\" text-anchor=\"middle\" \
             font-size=\"{}px\" font-weight=\"700\" fill=\"{}\">{}</text>",
            theme.service_abbrev_size,
            theme.accent_color,
            escape_xml(&label.abbrev)
        );
        let _ = write!(
            body,
            "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}px\" \
             font-weight=\"500\" fill=\"{}\">{}</text>",
            item_y + 18.0,
            theme.service_name_size,
            theme.text_color,
            escape_xml(&label.line1)
        );
        let _ = write!(
            body,
            "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}px\" \
             font-weight=\"500\" fill=\"{}\">{}</text>",
            item_y + 31.0,
            theme.service_name_size,
            theme.text_color,
            escape_xml(&label.line2)
        );
        close_link(body, link);
    }
}

fn render_footer(
    body: &mut String,
    canvas: &CanvasConfig,
    theme: &Theme,
    branding: Option<&LogoData>,
    branding_url: &str,
) {
    let date = chrono::Local::now().format("%B %-d, %Y");
    let _ = write!(
        body,
        "<text class=\"footer-text\" x=\"35\" y=\"{:.2}\" font-size=\"{}px\">Data as of: {date}</text>",
        canvas.height - 43.0,
        theme.footer_size
    );
    let _ = write!(
        body,
        "<text class=\"footer-note\" x=\"35\" y=\"{:.2}\" font-size=\"{}px\">{}</text>",
        canvas.height - 31.0,
        theme.footer_note_size,
        escape_xml(&canvas.disclaimer)
    );

    if let Some(logo) = branding {
        let logo_w = 120.0;
        let logo_h = 19.0;
        let _ = write!(
            body,
            "<a href=\"{}\" target=\"_blank\" style=\"cursor: pointer\">\
             <image x=\"{:.2}\" y=\"{:.2}\" width=\"{logo_w}\" height=\"{logo_h}\" href=\"{}\" \
             preserveAspectRatio=\"xMidYMid meet\"/></a>",
            escape_xml(branding_url),
            canvas.width - 35.0 - logo_w,
            canvas.height - 35.0 - logo_h,
            logo.data_uri()
        );
    }
}

fn open_link(body: &mut String, website: &str) -> bool {
    if website.trim().is_empty() {
        return false;
    }
    let _ = write!(
        body,
        "<a href=\"{}\" target=\"_blank\" class=\"logo-link\">",
        escape_xml(website)
    );
    true
}

fn close_link(body: &mut String, opened: bool) {
    if opened {
        body.push_str("</a>");
    }
}

pub fn write_svg(svg: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Inter".to_string();
    opt.default_size = usvg::Size::from_wh(config.canvas.width, config.canvas.height)
        .unwrap_or(usvg::Size::from_wh(1920.0, 1080.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
