use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::MatchStatus;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod matchbet {
    use super::*;

    /// One-time setup of the config, treasury and custody vault.
    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, admin)
    }

    pub fn update_platform_config(
        ctx: Context<UpdatePlatformConfig>,
        house_edge_bps: u16,
        min_bet_amount: u64,
        max_bet_amount: u64,
    ) -> Result<()> {
        instructions::update_platform_config::handler(
            ctx,
            house_edge_bps,
            min_bet_amount,
            max_bet_amount,
        )
    }

    /// Stops new bets. Deposits, withdrawals and settlement keep working.
    pub fn pause_platform(ctx: Context<PausePlatform>) -> Result<()> {
        instructions::pause_platform::handler(ctx, true)
    }

    pub fn unpause_platform(ctx: Context<PausePlatform>) -> Result<()> {
        instructions::pause_platform::handler(ctx, false)
    }

    /// Admin pulls lamports out of custody.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::emergency_withdraw::handler(ctx, amount)
    }

    /// Admin pulls accrued house fees out of custody.
    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>, amount: u64) -> Result<()> {
        instructions::withdraw_platform_fees::handler(ctx, amount)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::handler(ctx, new_admin)
    }

    /// Create the caller's user account PDA.
    pub fn create_user_profile(ctx: Context<CreateUserProfile>, username: String) -> Result<()> {
        instructions::create_user_profile::handler(ctx, username)
    }

    /// Move lamports from the caller's wallet into their custodial balance.
    pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
        instructions::deposit_funds::handler(ctx, amount)
    }

    /// Pay lamports from the caller's custodial balance back to their wallet.
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        instructions::withdraw_funds::handler(ctx, amount)
    }

    pub fn update_user_profile(ctx: Context<UpdateUserProfile>, username: String) -> Result<()> {
        instructions::update_user_profile::handler(ctx, username)
    }

    /// Authorize `oracle_authority` to report the result of one match.
    pub fn register_oracle(ctx: Context<RegisterOracle>, oracle_authority: Pubkey) -> Result<()> {
        instructions::register_oracle::handler(ctx, oracle_authority)
    }

    pub fn create_match(
        ctx: Context<CreateMatch>,
        match_id: Pubkey,
        team1: String,
        team2: String,
        start_time: i64,
        end_time: i64,
        description: String,
    ) -> Result<()> {
        instructions::create_match::handler(
            ctx,
            match_id,
            team1,
            team2,
            start_time,
            end_time,
            description,
        )
    }

    pub fn update_match_status(
        ctx: Context<UpdateMatchStatus>,
        new_status: MatchStatus,
    ) -> Result<()> {
        instructions::update_match_status::handler(ctx, new_status)
    }

    pub fn close_match_betting(ctx: Context<CloseMatchBetting>) -> Result<()> {
        instructions::close_match_betting::handler(ctx)
    }

    /// Registered oracle reports the winner and completes the match.
    /// `winning_team` is 0 for team1, 1 for team2.
    pub fn update_match_result(
        ctx: Context<UpdateMatchResult>,
        winning_team: u8,
        result_notes: String,
    ) -> Result<()> {
        instructions::update_match_result::handler(ctx, winning_team, result_notes)
    }

    pub fn place_bet(
        ctx: Context<PlaceBet>,
        amount: u64,
        predicted_team: u8,
        odds_accepted_bps: u64,
    ) -> Result<()> {
        instructions::place_bet::handler(ctx, amount, predicted_team, odds_accepted_bps)
    }

    /// Bettor withdraws a bet while betting is still open.
    pub fn cancel_bet(ctx: Context<CancelBet>) -> Result<()> {
        instructions::cancel_bet::handler(ctx)
    }

    /// Credit a bet's payout once its match is Completed or Cancelled.
    /// Permissionless.
    pub fn settle_bet(ctx: Context<SettleBet>) -> Result<()> {
        instructions::settle_bet::handler(ctx)
    }
}
