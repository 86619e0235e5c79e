use anchor_lang::prelude::*;

use crate::errors::MatchBetError;

#[account]
#[derive(InitSpace)]
pub struct BetRecord {
    pub bettor: Pubkey,
    pub match_id: Pubkey,
    /// Stake in lamports, taken from the bettor's custodial balance.
    pub amount: u64,
    /// 0 = team1, 1 = team2.
    pub predicted_team: u8,
    /// Odds the bettor saw when placing the bet (basis points).
    pub odds_accepted_bps: u64,
    pub placed_at: i64,
    pub settled: bool,
    /// Lamports credited back on settlement (0 for a losing bet).
    pub payout: u64,
    pub settled_at: Option<i64>,
    /// PDA bump seed.
    pub bump: u8,
}

impl BetRecord {
    pub const SEED: &'static [u8] = b"bet";

    pub fn is_initialized(&self) -> bool {
        self.bettor != Pubkey::default()
    }

    pub fn mark_settled(&mut self, payout: u64, now: i64) -> Result<()> {
        require!(!self.settled, MatchBetError::AlreadySettled);
        self.settled = true;
        self.payout = payout;
        self.settled_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_once() {
        let mut bet = BetRecord {
            bettor: Pubkey::new_unique(),
            match_id: Pubkey::new_unique(),
            amount: 1_000_000,
            predicted_team: 1,
            odds_accepted_bps: 10_000,
            placed_at: 10,
            settled: false,
            payout: 0,
            settled_at: None,
            bump: 255,
        };

        bet.mark_settled(1_900_000, 20).unwrap();
        assert!(bet.settled);
        assert_eq!(bet.payout, 1_900_000);
        assert_eq!(bet.settled_at, Some(20));

        assert_eq!(
            bet.mark_settled(0, 30).unwrap_err(),
            MatchBetError::AlreadySettled.into()
        );
        assert_eq!(bet.payout, 1_900_000);
    }
}
