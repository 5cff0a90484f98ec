pub mod traits;
pub mod search;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use search::SearchConfig;
pub use traits::ConfigSection;
