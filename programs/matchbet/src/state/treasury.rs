use anchor_lang::prelude::*;

use crate::errors::MatchBetError;

/// Aggregate counters for the lamports held in the custody vault.
///
/// `custodial_balance` always equals `total_deposits - total_withdrawals`.
/// Settlement moves value between user balances inside the custodial
/// balance, so only deposits and withdrawals of any kind touch it.
#[account]
#[derive(InitSpace)]
pub struct Treasury {
    /// Lifetime lamports deposited by users.
    pub total_deposits: u64,
    /// Lifetime lamports paid out of the vault (users, fees, emergencies).
    pub total_withdrawals: u64,
    /// Fees earned on settled matches and not yet withdrawn.
    pub platform_fees_accrued: u64,
    /// Lamports held on behalf of users and the house.
    pub custodial_balance: u64,
    /// Lifetime lamports wagered across all matches.
    pub total_wagered: u64,
    /// PDA bump seed.
    pub bump: u8,
    /// Bump of the system-owned vault holding the lamports.
    pub vault_bump: u8,
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury";
    pub const VAULT_SEED: &'static [u8] = b"vault";

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.custodial_balance = self
            .custodial_balance
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.custodial_balance,
            MatchBetError::InsufficientBalance
        );
        self.custodial_balance -= amount;
        self.total_withdrawals = self
            .total_withdrawals
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn accrue_fee(&mut self, fee: u64) -> Result<()> {
        self.platform_fees_accrued = self
            .platform_fees_accrued
            .checked_add(fee)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    /// Pays accrued fees out of custody.
    pub fn withdraw_fees(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.platform_fees_accrued,
            MatchBetError::InsufficientBalance
        );
        self.record_withdrawal(amount)?;
        self.platform_fees_accrued -= amount;
        Ok(())
    }

    pub fn record_wager(&mut self, amount: u64) -> Result<()> {
        self.total_wagered = self
            .total_wagered
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    /// Backs out a wager cancelled before betting closed.
    pub fn release_wager(&mut self, amount: u64) -> Result<()> {
        self.total_wagered = self
            .total_wagered
            .checked_sub(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn is_balanced(&self) -> bool {
        self.total_deposits.checked_sub(self.total_withdrawals) == Some(self.custodial_balance)
    }
}
