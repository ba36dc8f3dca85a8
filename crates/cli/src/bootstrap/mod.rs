pub mod config;
pub mod files;
pub mod logging;

pub use config::load_config;
pub use files::prepare_data_dir;
pub use logging::init_logging;
