pub mod bet_record;
pub mod global_config;
pub mod match_record;
pub mod oracle_registration;
pub mod treasury;
pub mod user_account;

pub use bet_record::*;
pub use global_config::*;
pub use match_record::*;
pub use oracle_registration::*;
pub use treasury::*;
pub use user_account::*;
