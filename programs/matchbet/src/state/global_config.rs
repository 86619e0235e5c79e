use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINTS, DEFAULT_HOUSE_EDGE_BPS, DEFAULT_MAX_BET, DEFAULT_MIN_BET};
use crate::errors::MatchBetError;

#[account]
#[derive(InitSpace)]
pub struct GlobalConfig {
    /// Admin who can update platform settings, matches and oracles.
    pub admin: Pubkey,
    /// Fee on the losing pool in basis points (500 = 5%).
    pub house_edge_bps: u16,
    /// Smallest accepted wager in lamports.
    pub min_bet_amount: u64,
    /// Largest accepted wager in lamports.
    pub max_bet_amount: u64,
    /// Circuit breaker for new bets.
    pub is_paused: bool,
    /// Unix timestamp of initialization (0 until initialized).
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl GlobalConfig {
    pub const SEED: &'static [u8] = b"config";

    /// A freshly allocated account is all zeroes, so a default admin means
    /// `initialize` has not run yet.
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    /// Writes the launch defaults into a freshly allocated config.
    pub fn initialize(&mut self, admin: Pubkey, now: i64, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), MatchBetError::AlreadyInitialized);
        require!(admin != Pubkey::default(), MatchBetError::InvalidInput);

        self.admin = admin;
        self.house_edge_bps = DEFAULT_HOUSE_EDGE_BPS;
        self.min_bet_amount = DEFAULT_MIN_BET;
        self.max_bet_amount = DEFAULT_MAX_BET;
        self.is_paused = false;
        self.created_at = now;
        self.bump = bump;
        Ok(())
    }

    pub fn is_admin(&self, signer: &Pubkey) -> bool {
        self.is_initialized() && self.admin == *signer
    }

    /// Hands governance to `new_admin`, returning the previous admin.
    pub fn set_admin(&mut self, new_admin: Pubkey) -> Result<Pubkey> {
        require!(new_admin != Pubkey::default(), MatchBetError::InvalidInput);
        Ok(std::mem::replace(&mut self.admin, new_admin))
    }

    pub fn apply_config(
        &mut self,
        house_edge_bps: u16,
        min_bet_amount: u64,
        max_bet_amount: u64,
    ) -> Result<()> {
        require!(
            u64::from(house_edge_bps) <= BASIS_POINTS,
            MatchBetError::InvalidConfig
        );
        require!(min_bet_amount < max_bet_amount, MatchBetError::InvalidConfig);

        self.house_edge_bps = house_edge_bps;
        self.min_bet_amount = min_bet_amount;
        self.max_bet_amount = max_bet_amount;
        Ok(())
    }

    /// House share of `losing_pool`, rounded down.
    pub fn house_fee(&self, losing_pool: u64) -> Result<u64> {
        let fee = u128::from(losing_pool)
            .checked_mul(u128::from(self.house_edge_bps))
            .ok_or(MatchBetError::InvalidAmount)?
            / u128::from(BASIS_POINTS);
        u64::try_from(fee).map_err(|_| error!(MatchBetError::InvalidAmount))
    }
}
