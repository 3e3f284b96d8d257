mod types;
mod loader;
mod validation;

pub use types::*;
pub use loader::load_config;
pub use validation::validate_config;
