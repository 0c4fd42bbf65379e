pub mod governance;
pub mod validator;
pub mod charity;
pub mod charity_name;
pub mod vote_record;
pub mod tally;

pub use governance::*;
pub use validator::*;
pub use charity::*;
pub use charity_name::*;
pub use vote_record::*;
pub use tally::*;
