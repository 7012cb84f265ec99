//! Reading config files and writing the first-run template.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, parse_toml};
pub use paths::{default_config_path, write_default_config};
