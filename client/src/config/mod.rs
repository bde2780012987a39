mod game_config;
mod log_config;
mod main_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use game_config::GameConfig;
pub use log_config::LogConfig;
pub use main_config::{CONFIG_FILE, Config, get_config_manager};
