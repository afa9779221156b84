use super::PanelBounds;

/// Cell sizing knobs for the generic packer. The cell height stays fixed
/// across panels so rows align between independently packed sections.
#[derive(Debug, Clone, Copy)]
pub struct GridOptions {
    pub inner_pad: f32,
    pub min_cell_width: f32,
    pub min_cell_height: f32,
    pub icon_size: f32,
    pub max_row_spacing: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            inner_pad: 10.0,
            min_cell_width: 38.0,
            min_cell_height: 52.0,
            icon_size: 28.0,
            max_row_spacing: 15.0,
        }
    }
}

impl GridOptions {
    pub fn from_canvas(canvas: &crate::config::CanvasConfig) -> Self {
        Self {
            inner_pad: canvas.inner_pad,
            min_cell_width: canvas.min_cell_width,
            min_cell_height: canvas.min_cell_height,
            icon_size: canvas.icon_size,
            max_row_spacing: canvas.max_row_spacing,
        }
    }
}

/// One placed item. `index` points into the caller's sorted item list;
/// items whose row would cross the panel's bottom edge are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedItem {
    pub index: usize,
    pub cell_center_x: f32,
    pub cell_center_y: f32,
    pub icon_size: f32,
    /// The label under the icon is skipped independently when it alone
    /// would cross the bottom edge.
    pub show_label: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub items: Vec<PackedItem>,
}

impl GridLayout {
    fn empty() -> Self {
        Self {
            cols: 0,
            rows: 0,
            cell_width: 0.0,
            cell_height: 0.0,
            items: Vec::new(),
        }
    }
}

/// Pack `count` items (already sorted by display key) into a panel.
///
/// Column count starts at the most the width allows and is reduced one at
/// a time while the taller grid still fits the height budget, trading
/// width-spread for a squarer, more evenly filled grid. Leftover vertical
/// space becomes capped inter-row spacing so short sections do not
/// stretch to the panel's full height.
pub fn pack(count: usize, bounds: PanelBounds, opts: GridOptions) -> GridLayout {
    if count == 0 {
        return GridLayout::empty();
    }

    let avail_w = bounds.width - opts.inner_pad * 2.0;
    let avail_h = bounds.height - opts.inner_pad * 2.0;

    let max_cols = (avail_w / opts.min_cell_width).floor() as usize;
    let mut cols = max_cols.min(count).max(1);
    let mut rows = count.div_ceil(cols);

    while cols > 1 && rows as f32 * opts.min_cell_height <= avail_h {
        let fewer = cols - 1;
        let taller = count.div_ceil(fewer);
        if taller as f32 * opts.min_cell_height > avail_h {
            break;
        }
        cols = fewer;
        rows = taller;
    }

    let cell_width = avail_w / cols as f32;
    let cell_height = opts.min_cell_height;
    let icon_size = opts
        .icon_size
        .min(cell_width - 10.0)
        .min(cell_height - 22.0)
        .max(0.0);

    let start_x = bounds.x + opts.inner_pad;
    let start_y = bounds.y + opts.inner_pad;

    let extra = avail_h - rows as f32 * cell_height;
    let raw_spacing = if rows > 1 {
        extra / (rows - 1) as f32
    } else {
        0.0
    };
    let row_spacing = raw_spacing.min(opts.max_row_spacing).max(0.0);
    let row_stride = cell_height + row_spacing;

    let mut items = Vec::with_capacity(count);
    for index in 0..count {
        let row = index / cols;
        let col = index % cols;

        let cell_center_x = start_x + col as f32 * cell_width + cell_width / 2.0;
        let cell_center_y = start_y + row as f32 * row_stride + cell_height / 2.0;

        // Overflowing rows are dropped outright rather than wrapped or
        // shrunk.
        if cell_center_y + cell_height / 2.0 > bounds.bottom() {
            continue;
        }

        let icon_y = cell_center_y - cell_height / 2.0 + 5.0;
        let label_y = icon_y + icon_size + 14.0;
        let show_label = label_y < bounds.bottom() - 5.0;

        items.push(PackedItem {
            index,
            cell_center_x,
            cell_center_y,
            icon_size,
            show_label,
        });
    }

    GridLayout {
        cols,
        rows,
        cell_width,
        cell_height,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w: f32, h: f32) -> PanelBounds {
        PanelBounds::new(100.0, 200.0, w, h)
    }

    #[test]
    fn zero_items_pack_to_nothing() {
        let layout = pack(0, bounds(300.0, 150.0), GridOptions::default());
        assert!(layout.items.is_empty());
    }

    #[test]
    fn cells_never_overlap_up_to_stress_count() {
        let opts = GridOptions::default();
        for count in 0..=50 {
            let layout = pack(count, bounds(400.0, 220.0), opts);
            for (i, a) in layout.items.iter().enumerate() {
                for b in layout.items.iter().skip(i + 1) {
                    let dx = (a.cell_center_x - b.cell_center_x).abs();
                    let dy = (a.cell_center_y - b.cell_center_y).abs();
                    assert!(
                        dx >= layout.cell_width - 0.01 || dy >= layout.cell_height - 0.01,
                        "cells overlap at count {count}: {a:?} vs {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn packing_is_idempotent() {
        let opts = GridOptions::default();
        let first = pack(17, bounds(350.0, 180.0), opts);
        let second = pack(17, bounds(350.0, 180.0), opts);
        assert_eq!(first, second);
    }

    #[test]
    fn items_stay_inside_panel_bounds() {
        let opts = GridOptions::default();
        let panel = bounds(200.0, 120.0);
        // Far more items than the panel can hold.
        let layout = pack(50, panel, opts);
        assert!(layout.items.len() < 50, "expected bottom rows truncated");
        for item in &layout.items {
            assert!(item.cell_center_y + layout.cell_height / 2.0 <= panel.bottom() + 0.01);
            assert!(item.cell_center_x + layout.cell_width / 2.0 <= panel.right() + 0.01);
            assert!(item.cell_center_x - layout.cell_width / 2.0 >= panel.x - 0.01);
        }
    }

    #[test]
    fn prefers_two_rows_over_one_long_row_when_height_allows() {
        // Width fits exactly two minimum-width columns; height fits two
        // rows. Three items must become a 2x2 grid, not a single row.
        let opts = GridOptions::default();
        let panel = bounds(96.0, 130.0); // avail 76x110
        let layout = pack(3, panel, opts);
        assert_eq!(layout.cols, 2);
        assert_eq!(layout.rows, 2);
        assert_eq!(layout.items.len(), 3);
    }

    #[test]
    fn column_reduction_stops_when_height_runs_out() {
        let opts = GridOptions::default();
        // avail 380x56: one row of up to 10 columns, no room for two rows.
        let layout = pack(6, bounds(400.0, 76.0), opts);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.cols, 6);
    }

    #[test]
    fn single_item_centers_in_one_cell() {
        let opts = GridOptions::default();
        let panel = bounds(120.0, 100.0);
        let layout = pack(1, panel, opts);
        assert_eq!(layout.cols, 1);
        assert_eq!(layout.items.len(), 1);
        let item = &layout.items[0];
        assert!((item.cell_center_x - (panel.x + panel.width / 2.0)).abs() < 0.01);
    }

    #[test]
    fn label_is_skipped_when_it_alone_would_overflow() {
        let opts = GridOptions::default();
        // One row fits, but the label line below the icon does not:
        // icon ends at y + pad + 5 + icon, label needs 14 more plus the
        // 5px guard.
        let panel = bounds(120.0, 62.0);
        let layout = pack(1, panel, opts);
        assert_eq!(layout.items.len(), 1);
        assert!(!layout.items[0].show_label);

        let roomy = pack(1, bounds(120.0, 110.0), opts);
        assert!(roomy.items[0].show_label);
    }

    #[test]
    fn row_spacing_is_capped_for_short_sections() {
        let opts = GridOptions::default();
        // A very tall panel collapses to one column; the leftover height
        // must become the capped spacing, not the whole surplus.
        let layout = pack(4, bounds(96.0, 400.0), opts);
        assert_eq!(layout.cols, 1);
        assert_eq!(layout.rows, 4);
        let stride = layout.items[1].cell_center_y - layout.items[0].cell_center_y;
        assert!((stride - (opts.min_cell_height + opts.max_row_spacing)).abs() < 0.01);
    }
}
