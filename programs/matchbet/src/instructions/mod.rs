pub mod cancel_bet;
pub mod close_match_betting;
pub mod create_match;
pub mod create_user_profile;
pub mod deposit_funds;
pub mod emergency_withdraw;
pub mod initialize;
pub mod pause_platform;
pub mod place_bet;
pub mod register_oracle;
pub mod settle_bet;
pub mod transfer_admin;
pub mod update_match_result;
pub mod update_match_status;
pub mod update_platform_config;
pub mod update_user_profile;
pub mod withdraw_funds;
pub mod withdraw_platform_fees;

pub use cancel_bet::*;
pub use close_match_betting::*;
pub use create_match::*;
pub use create_user_profile::*;
pub use deposit_funds::*;
pub use emergency_withdraw::*;
pub use initialize::*;
pub use pause_platform::*;
pub use place_bet::*;
pub use register_oracle::*;
pub use settle_bet::*;
pub use transfer_admin::*;
pub use update_match_result::*;
pub use update_match_status::*;
pub use update_platform_config::*;
pub use update_user_profile::*;
pub use withdraw_funds::*;
pub use withdraw_platform_fees::*;
