use anchor_lang::prelude::*;

/// Grants `oracle_authority` the right to report the result of one match.
/// Several registrations may exist per match; the first report to land
/// completes the match and later reports fail on its status.
#[account]
#[derive(InitSpace, Debug)]
pub struct OracleRegistration {
    pub oracle_authority: Pubkey,
    pub match_id: Pubkey,
    /// Winning team this oracle reported, if it has reported.
    pub reported_result: Option<u8>,
    pub reported_at: Option<i64>,
    /// PDA bump seed.
    pub bump: u8,
}

impl OracleRegistration {
    pub const SEED: &'static [u8] = b"oracle";

    pub fn is_initialized(&self) -> bool {
        self.oracle_authority != Pubkey::default()
    }

    pub fn authorizes(&self, signer: &Pubkey, match_id: &Pubkey) -> bool {
        self.is_initialized() && self.oracle_authority == *signer && self.match_id == *match_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_registered_pair_is_authorized() {
        let oracle = Pubkey::new_unique();
        let match_id = Pubkey::new_unique();
        let reg = OracleRegistration {
            oracle_authority: oracle,
            match_id,
            reported_result: None,
            reported_at: None,
            bump: 255,
        };

        assert!(reg.authorizes(&oracle, &match_id));
        assert!(!reg.authorizes(&Pubkey::new_unique(), &match_id));
        assert!(!reg.authorizes(&oracle, &Pubkey::new_unique()));

        let blank = OracleRegistration {
            oracle_authority: Pubkey::default(),
            match_id: Pubkey::default(),
            reported_result: None,
            reported_at: None,
            bump: 0,
        };
        assert!(!blank.authorizes(&Pubkey::default(), &Pubkey::default()));
    }
}
