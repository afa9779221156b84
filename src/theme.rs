use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub text_color: String,
    pub accent_color: String,
    pub muted_text_color: String,
    pub header_size: f32,
    pub section_title_size: f32,
    pub label_size: f32,
    pub monogram_size: f32,
    pub roster_text_size: f32,
    pub service_abbrev_size: f32,
    pub service_name_size: f32,
    pub footer_size: f32,
    pub footer_note_size: f32,
    pub category_colors: BTreeMap<String, String>,
}

impl Theme {
    pub fn genfinity() -> Self {
        let category_colors = [
            ("council", "#8b5cf6"),
            ("core", "#a78bfa"),
            ("media", "#c4b5fd"),
            ("wallets", "#7c3aed"),
            ("defi", "#6d28d9"),
            ("rwas", "#5b21b6"),
            ("iot", "#4c1d95"),
            ("meme", "#9333ea"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            background: "#000000".to_string(),
            text_color: "#ffffff".to_string(),
            accent_color: "#8b5cf6".to_string(),
            muted_text_color: "#9ca3af".to_string(),
            header_size: 18.0,
            section_title_size: 3.5,
            label_size: 6.0,
            monogram_size: 12.0,
            roster_text_size: 7.0,
            service_abbrev_size: 16.0,
            service_name_size: 11.0,
            footer_size: 10.0,
            footer_note_size: 9.0,
            category_colors,
        }
    }

    pub fn category_color(&self, category: &str) -> &str {
        self.category_colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.accent_color.as_str())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::genfinity()
    }
}

pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let parse = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    let r = parse(1..3);
    let g = parse(3..5);
    let b = parse(5..7);
    format!("rgba({r}, {g}, {b}, {alpha})")
}
