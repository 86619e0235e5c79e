use anchor_lang::prelude::*;

use crate::constants::MAX_USERNAME_LEN;
use crate::errors::MatchBetError;

#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    /// Wallet that owns this account.
    pub owner: Pubkey,
    /// Display name (max 32 UTF-8 bytes).
    #[max_len(32)]
    pub username: String,
    /// Custodial lamports available to bet or withdraw.
    pub balance: u64,
    pub total_bets_placed: u64,
    pub total_bets_won: u64,
    /// Lifetime lamports staked.
    pub total_wagered: u64,
    /// Lifetime lamports credited back by winning settlements.
    pub total_winnings: u64,
    /// Unix timestamp of profile creation.
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl UserAccount {
    pub const SEED: &'static [u8] = b"user";

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn validate_username(username: &str) -> Result<()> {
        require!(!username.trim().is_empty(), MatchBetError::InvalidInput);
        require!(
            username.len() <= MAX_USERNAME_LEN,
            MatchBetError::InvalidInput
        );
        Ok(())
    }

    /// Sets up a freshly allocated account for `owner` with zeroed stats.
    pub fn initialize(&mut self, owner: Pubkey, username: String, now: i64, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), MatchBetError::AlreadyExists);
        Self::validate_username(&username)?;

        self.owner = owner;
        self.username = username;
        self.balance = 0;
        self.total_bets_placed = 0;
        self.total_bets_won = 0;
        self.total_wagered = 0;
        self.total_winnings = 0;
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(MatchBetError::InsufficientBalance)?;
        Ok(())
    }

    /// Moves `amount` from the spendable balance into an open wager.
    pub fn stake(&mut self, amount: u64) -> Result<()> {
        self.debit(amount)?;
        self.total_bets_placed = self
            .total_bets_placed
            .checked_add(1)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.total_wagered = self
            .total_wagered
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    /// Reverses `stake` for a bet withdrawn before betting closed.
    pub fn unstake(&mut self, amount: u64) -> Result<()> {
        self.credit(amount)?;
        self.total_bets_placed = self
            .total_bets_placed
            .checked_sub(1)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.total_wagered = self
            .total_wagered
            .checked_sub(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn record_win(&mut self, payout: u64) -> Result<()> {
        self.credit(payout)?;
        self.total_bets_won = self
            .total_bets_won
            .checked_add(1)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.total_winnings = self
            .total_winnings
            .checked_add(payout)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }
}
