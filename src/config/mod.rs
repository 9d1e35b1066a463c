pub mod config;

pub use config::{Config, Credentials, get_credentials, load_config, save_config};
