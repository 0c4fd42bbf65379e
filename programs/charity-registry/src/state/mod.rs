pub mod registry_config;
pub mod charity_entry;

pub use registry_config::*;
pub use charity_entry::*;
