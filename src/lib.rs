pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod html;
pub mod layout;
pub mod logo;
pub mod render;
pub mod taxonomy;
pub mod text;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use taxonomy::{SectionMap, Taxonomy, group_records};
