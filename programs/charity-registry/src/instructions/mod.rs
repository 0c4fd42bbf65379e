// Instructions module
// - initialize_registry
// - admit_charity (voting authority only, via governance CPI)
// - make_donation / make_token_donation
// - release_donation / release_token_donation (admin only)
// - limit_donation, disable_donation_limit, remove_charity,
//   set_emergency_stop, set_donation_release_pause (admin only)
// - add_token_to_whitelist (admin only)

pub mod initialize_registry;
pub mod admit_charity;
pub mod make_donation;
pub mod make_token_donation;
pub mod release_donation;
pub mod release_token_donation;
pub mod manage_charity;
pub mod add_token_to_whitelist;

pub use initialize_registry::*;
pub use admit_charity::*;
pub use make_donation::*;
pub use make_token_donation::*;
pub use release_donation::*;
pub use release_token_donation::*;
pub use manage_charity::*;
pub use add_token_to_whitelist::*;
