use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas geometry. All values are output pixels on the fixed HD canvas;
/// panel widths are derived from these plus per-row proportional shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub content_y: f32,
    pub panel_margin: f32,
    pub row_gap: f32,
    pub gap: f32,
    pub footer_space: f32,
    pub council_width: f32,
    pub core_orgs_width: f32,
    pub inner_pad: f32,
    pub min_cell_width: f32,
    pub min_cell_height: f32,
    pub icon_size: f32,
    pub max_row_spacing: f32,
    pub title: String,
    pub disclaimer: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            content_y: 110.0,
            panel_margin: 70.0,
            row_gap: 28.0,
            gap: 8.0,
            footer_space: 85.0,
            council_width: 320.0,
            core_orgs_width: 180.0,
            inner_pad: 10.0,
            min_cell_width: 38.0,
            min_cell_height: 52.0,
            icon_size: 28.0,
            max_row_spacing: 15.0,
            title: "An Incomplete Map of the Hedera Ecosystem".to_string(),
            disclaimer: "Note: The list of projects is not comprehensive.".to_string(),
        }
    }
}

/// Fixed relative paths under the working root. Behavior is driven by
/// these, not by per-stage flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub catalog: PathBuf,
    pub css: PathBuf,
    pub logos_dir: PathBuf,
    pub template: PathBuf,
    pub out_svg: PathBuf,
    pub out_html: PathBuf,
    pub out_png: PathBuf,
    pub branding_logo: PathBuf,
    pub branding_url: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/ecosystem_master.csv"),
            css: PathBuf::from("assets/theme-genfinity.css"),
            logos_dir: PathBuf::from("logos"),
            template: PathBuf::from("dist/ecosystem-map.html"),
            out_svg: PathBuf::from("dist/ecosystem-map.svg"),
            out_html: PathBuf::from("dist/ecosystem.html"),
            out_png: PathBuf::from("dist/ecosystem-map.png"),
            branding_logo: PathBuf::from("logos/branding/genfinity-logo.svg"),
            branding_url: "https://genfinity.io".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub paths: PathsConfig,
    pub theme: Theme,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hd_canvas() {
        let config = Config::default();
        assert_eq!(config.canvas.width, 1920.0);
        assert_eq!(config.canvas.height, 1080.0);
        assert_eq!(config.canvas.min_cell_height, 52.0);
    }

    #[test]
    fn partial_json_overrides_keep_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"canvas": {"width": 3840.0, "height": 2160.0}}"#).unwrap();
        assert_eq!(config.canvas.width, 3840.0);
        assert_eq!(config.canvas.content_y, 110.0);
        assert_eq!(config.paths.logos_dir, PathBuf::from("logos"));
    }
}
