use anchor_lang::prelude::*;

use crate::constants::{
    BASIS_POINTS, MAX_DESCRIPTION_LEN, MAX_ODDS_BPS, MAX_RESULT_NOTES_LEN, MAX_TEAM_NAME_LEN,
};
use crate::errors::MatchBetError;
use crate::state::GlobalConfig;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum MatchStatus {
    /// Created, accepting bets until start time or an admin close.
    Scheduled,
    /// In play, betting closed.
    Live,
    /// Result known (or declared over by the admin).
    Completed,
    /// Called off; every bet is refunded.
    Cancelled,
}

impl MatchStatus {
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (MatchStatus::Scheduled, MatchStatus::Live)
                | (MatchStatus::Live, MatchStatus::Completed)
                | (MatchStatus::Scheduled, MatchStatus::Cancelled)
                | (MatchStatus::Live, MatchStatus::Cancelled)
        )
    }

    pub fn is_final(self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Cancelled)
    }
}

#[account]
#[derive(InitSpace)]
pub struct MatchRecord {
    /// Caller-chosen identity the PDA is derived from.
    pub match_id: Pubkey,
    #[max_len(64)]
    pub team1: String,
    #[max_len(64)]
    pub team2: String,
    #[max_len(256)]
    pub description: String,
    /// Unix timestamp when betting stops and play begins.
    pub start_time: i64,
    /// Scheduled end of play.
    pub end_time: i64,
    pub total_pool: u64,
    /// Stake backing team 0 and team 1.
    pub team_pools: [u64; 2],
    /// Number of open or settled bets.
    pub total_bets: u64,
    pub status: MatchStatus,
    /// Latches to true; never reopens.
    pub is_betting_closed: bool,
    /// 0 = team1, 1 = team2. Set by an oracle report.
    pub winning_team: Option<u8>,
    #[max_len(32)]
    pub result_notes: String,
    /// Oracle whose report completed the match.
    pub resolved_by: Option<Pubkey>,
    /// House fee taken from the losing pool when the result landed.
    pub fee_collected: u64,
    /// Losing pool net of the house fee, shared pro rata by winners.
    pub distributable_pool: u64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl MatchRecord {
    pub const SEED: &'static [u8] = b"match";

    pub fn is_initialized(&self) -> bool {
        self.match_id != Pubkey::default()
    }

    pub fn validate_details(
        team1: &str,
        team2: &str,
        description: &str,
        start_time: i64,
        end_time: i64,
        now: i64,
    ) -> Result<()> {
        for team in [team1, team2] {
            require!(!team.trim().is_empty(), MatchBetError::InvalidInput);
            require!(team.len() <= MAX_TEAM_NAME_LEN, MatchBetError::InvalidInput);
        }
        require!(team1 != team2, MatchBetError::InvalidInput);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            MatchBetError::InvalidInput
        );
        require!(start_time > now, MatchBetError::InvalidInput);
        require!(start_time < end_time, MatchBetError::InvalidInput);
        Ok(())
    }

    /// Betting closes on an admin close, the Live transition, or once the
    /// clock reaches `start_time`, whichever comes first.
    pub fn is_betting_open(&self, now: i64) -> bool {
        !self.is_betting_closed && self.status == MatchStatus::Scheduled && now < self.start_time
    }

    pub fn close_betting(&mut self) {
        self.is_betting_closed = true;
    }

    /// Latches the closed flag once the clock has passed `start_time`.
    pub fn sync_betting_window(&mut self, now: i64) {
        if now >= self.start_time {
            self.close_betting();
        }
    }

    /// Current payout odds for backing `team`, in basis points of profit
    /// per unit staked: `opposing_pool * 10000 / team_pool`, rounded down.
    /// An empty match quotes even odds and an unbacked side quotes 100x.
    pub fn team_odds_bps(&self, team: u8) -> u64 {
        let (backing, opposing) = match team {
            0 => (self.team_pools[0], self.team_pools[1]),
            1 => (self.team_pools[1], self.team_pools[0]),
            _ => return 0,
        };
        if backing == 0 {
            return if opposing == 0 { BASIS_POINTS } else { MAX_ODDS_BPS };
        }
        let odds = u128::from(opposing) * u128::from(BASIS_POINTS) / u128::from(backing);
        u64::try_from(odds).unwrap_or(u64::MAX)
    }

    pub fn transition_to(&mut self, next: MatchStatus) -> Result<()> {
        require!(
            self.status.can_transition_to(next),
            MatchBetError::InvalidStatusTransition
        );
        self.status = next;
        if next != MatchStatus::Completed {
            // Live and Cancelled both end betting.
            self.close_betting();
        }
        Ok(())
    }

    pub fn add_stake(&mut self, team: u8, amount: u64) -> Result<()> {
        let pool = self
            .team_pools
            .get_mut(usize::from(team))
            .ok_or(MatchBetError::InvalidInput)?;
        *pool = pool.checked_add(amount).ok_or(MatchBetError::InvalidAmount)?;
        self.total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.total_bets = self
            .total_bets
            .checked_add(1)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    pub fn remove_stake(&mut self, team: u8, amount: u64) -> Result<()> {
        let pool = self
            .team_pools
            .get_mut(usize::from(team))
            .ok_or(MatchBetError::InvalidInput)?;
        *pool = pool.checked_sub(amount).ok_or(MatchBetError::InvalidAmount)?;
        self.total_pool = self
            .total_pool
            .checked_sub(amount)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.total_bets = self
            .total_bets
            .checked_sub(1)
            .ok_or(MatchBetError::InvalidAmount)?;
        Ok(())
    }

    /// Records an oracle result and books the house fee on the losing pool.
    /// Returns the fee so the caller can accrue it in the treasury.
    pub fn record_result(
        &mut self,
        winning_team: u8,
        notes: String,
        oracle: Pubkey,
        config: &GlobalConfig,
    ) -> Result<u64> {
        require!(
            matches!(self.status, MatchStatus::Scheduled | MatchStatus::Live),
            MatchBetError::InvalidStatusTransition
        );
        require!(winning_team <= 1, MatchBetError::InvalidInput);
        require!(
            notes.len() <= MAX_RESULT_NOTES_LEN,
            MatchBetError::InvalidInput
        );

        let winning_pool = self.team_pools[usize::from(winning_team)];
        let losing_pool = self.team_pools[usize::from(1 - winning_team)];
        // Nobody backed the winner: every bet is refunded and no fee is due.
        let fee = if winning_pool == 0 {
            0
        } else {
            config.house_fee(losing_pool)?
        };

        self.winning_team = Some(winning_team);
        self.result_notes = notes;
        self.resolved_by = Some(oracle);
        self.fee_collected = fee;
        self.distributable_pool = losing_pool
            .checked_sub(fee)
            .ok_or(MatchBetError::InvalidAmount)?;
        self.status = MatchStatus::Completed;
        self.close_betting();
        Ok(fee)
    }

    /// Lamports returned to a bet of `amount` on `predicted_team` once the
    /// match is final.
    pub fn payout_for(&self, amount: u64, predicted_team: u8) -> Result<u64> {
        require!(self.status.is_final(), MatchBetError::MatchNotFinalized);

        let winner = match (self.status, self.winning_team) {
            (MatchStatus::Completed, Some(team)) => team,
            _ => return Ok(amount),
        };
        let winning_pool = self.team_pools[usize::from(winner)];
        if winning_pool == 0 {
            return Ok(amount);
        }
        if predicted_team != winner {
            return Ok(0);
        }

        let share = u128::from(amount)
            .checked_mul(u128::from(self.distributable_pool))
            .ok_or(MatchBetError::InvalidAmount)?
            / u128::from(winning_pool);
        let share = u64::try_from(share).map_err(|_| error!(MatchBetError::InvalidAmount))?;
        Ok(amount
            .checked_add(share)
            .ok_or(MatchBetError::InvalidAmount)?)
    }
}
