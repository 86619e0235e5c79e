pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_TEAM_NAME_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_RESULT_NOTES_LEN: usize = 32;

pub const BASIS_POINTS: u64 = 10_000;
/// Quoted odds for a side nobody has backed yet (100x).
pub const MAX_ODDS_BPS: u64 = BASIS_POINTS * 100;

/// 5% of the losing pool.
pub const DEFAULT_HOUSE_EDGE_BPS: u16 = 500;
/// 0.001 SOL
pub const DEFAULT_MIN_BET: u64 = 1_000_000;
/// 100 SOL
pub const DEFAULT_MAX_BET: u64 = 100_000_000_000;
