// Instructions module
// - initialize (authority becomes first validator)
// - set_charity_registry (authority only)
// - add_validator (validators only)
// - init_charity (validators only)
// - vote (validators only, once per charity)
// - resolve_charity (validators only, admits approved charities by CPI)

pub mod initialize;
pub mod set_charity_registry;
pub mod add_validator;
pub mod init_charity;
pub mod vote;
pub mod resolve_charity;

pub use initialize::*;
pub use set_charity_registry::*;
pub use add_validator::*;
pub use init_charity::*;
pub use vote::*;
pub use resolve_charity::*;
