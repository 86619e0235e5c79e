use anchor_lang::prelude::*;

use crate::state::MatchStatus;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub house_edge_bps: u16,
    pub min_bet_amount: u64,
    pub max_bet_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlatformConfigUpdated {
    pub admin: Pubkey,
    pub house_edge_bps: u16,
    pub min_bet_amount: u64,
    pub max_bet_amount: u64,
}

#[event]
pub struct PlatformPauseToggled {
    pub admin: Pubkey,
    pub is_paused: bool,
}

#[event]
pub struct AdminTransferred {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct TreasuryWithdrawal {
    pub admin: Pubkey,
    pub amount: u64,
    /// True for fee withdrawals, false for emergency withdrawals.
    pub is_fee_withdrawal: bool,
    pub custodial_balance: u64,
}

#[event]
pub struct UserProfileCreated {
    pub owner: Pubkey,
    pub username: String,
    pub timestamp: i64,
}

#[event]
pub struct UserProfileUpdated {
    pub owner: Pubkey,
    pub username: String,
}

#[event]
pub struct FundsDeposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct OracleRegistered {
    pub oracle_authority: Pubkey,
    pub match_id: Pubkey,
}

#[event]
pub struct MatchCreated {
    pub match_id: Pubkey,
    pub team1: String,
    pub team2: String,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct MatchStatusUpdated {
    pub match_id: Pubkey,
    pub old_status: MatchStatus,
    pub new_status: MatchStatus,
}

#[event]
pub struct MatchBettingClosed {
    pub match_id: Pubkey,
    pub total_pool: u64,
}

#[event]
pub struct MatchResultReported {
    pub match_id: Pubkey,
    pub oracle_authority: Pubkey,
    pub winning_team: u8,
    pub fee_collected: u64,
    pub distributable_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetPlaced {
    pub bettor: Pubkey,
    pub match_id: Pubkey,
    pub amount: u64,
    pub predicted_team: u8,
    pub odds_accepted_bps: u64,
    pub timestamp: i64,
}

#[event]
pub struct BetCancelled {
    pub bettor: Pubkey,
    pub match_id: Pubkey,
    pub refund_amount: u64,
}

#[event]
pub struct BetSettled {
    pub bettor: Pubkey,
    pub match_id: Pubkey,
    pub amount: u64,
    pub payout: u64,
    pub won: bool,
}
