use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::BetPlaced;
use crate::state::{BetRecord, GlobalConfig, MatchRecord, Treasury, UserAccount};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [MatchRecord::SEED, match_record.match_id.as_ref()],
        bump = match_record.bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    #[account(
        mut,
        seeds = [UserAccount::SEED, bettor.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == bettor.key() @ MatchBetError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + BetRecord::INIT_SPACE,
        seeds = [
            BetRecord::SEED,
            bettor.key().as_ref(),
            match_record.match_id.as_ref(),
        ],
        bump,
    )]
    pub bet_record: Account<'info, BetRecord>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Preconditions for a new bet, checked in a fixed order so each failure
/// reports a single reason. The odds guard runs last: a bet is refused when
/// the pools have moved below the odds the bettor accepted.
#[allow(clippy::too_many_arguments)]
pub fn check_bet(
    config: &GlobalConfig,
    record: &MatchRecord,
    user: &UserAccount,
    bet_exists: bool,
    amount: u64,
    predicted_team: u8,
    odds_accepted_bps: u64,
    now: i64,
) -> Result<()> {
    require!(!config.is_paused, MatchBetError::PlatformPaused);
    require!(record.is_betting_open(now), MatchBetError::BettingClosed);
    require!(!bet_exists, MatchBetError::AlreadyExists);
    require!(
        amount >= config.min_bet_amount,
        MatchBetError::BetAmountTooLow
    );
    require!(
        amount <= config.max_bet_amount,
        MatchBetError::BetAmountTooHigh
    );
    require!(predicted_team <= 1, MatchBetError::InvalidInput);
    require!(amount <= user.balance, MatchBetError::InsufficientBalance);
    require!(
        record.team_odds_bps(predicted_team) >= odds_accepted_bps,
        MatchBetError::OddsMoved
    );
    Ok(())
}

pub fn handler(
    ctx: Context<PlaceBet>,
    amount: u64,
    predicted_team: u8,
    odds_accepted_bps: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let record = &mut ctx.accounts.match_record;
    let user = &mut ctx.accounts.user_account;
    let bet = &mut ctx.accounts.bet_record;

    check_bet(
        &ctx.accounts.global_config,
        record,
        user,
        bet.is_initialized(),
        amount,
        predicted_team,
        odds_accepted_bps,
        now,
    )?;

    user.stake(amount)?;
    record.add_stake(predicted_team, amount)?;
    ctx.accounts.treasury.record_wager(amount)?;

    bet.bettor = ctx.accounts.bettor.key();
    bet.match_id = record.match_id;
    bet.amount = amount;
    bet.predicted_team = predicted_team;
    bet.odds_accepted_bps = odds_accepted_bps;
    bet.placed_at = now;
    bet.settled = false;
    bet.payout = 0;
    bet.settled_at = None;
    bet.bump = ctx.bumps.bet_record;

    emit!(BetPlaced {
        bettor: bet.bettor,
        match_id: bet.match_id,
        amount,
        predicted_team,
        odds_accepted_bps,
        timestamp: now,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MatchStatus;

    const NOW: i64 = 1_700_000_000;
    const MIN: u64 = 1_000_000;
    const MAX: u64 = 100_000_000_000;

    fn config() -> GlobalConfig {
        GlobalConfig {
            admin: Pubkey::new_unique(),
            house_edge_bps: 500,
            min_bet_amount: MIN,
            max_bet_amount: MAX,
            is_paused: false,
            created_at: 0,
            bump: 255,
        }
    }

    fn open_match() -> MatchRecord {
        MatchRecord {
            match_id: Pubkey::new_unique(),
            team1: "Home".to_string(),
            team2: "Away".to_string(),
            description: String::new(),
            start_time: NOW + 60,
            end_time: NOW + 10_860,
            total_pool: 0,
            team_pools: [0, 0],
            total_bets: 0,
            status: MatchStatus::Scheduled,
            is_betting_closed: false,
            winning_team: None,
            result_notes: String::new(),
            resolved_by: None,
            fee_collected: 0,
            distributable_pool: 0,
            created_at: NOW,
            bump: 255,
        }
    }

    fn funded_user(balance: u64) -> UserAccount {
        UserAccount {
            owner: Pubkey::new_unique(),
            username: "Alice".to_string(),
            balance,
            total_bets_placed: 0,
            total_bets_won: 0,
            total_wagered: 0,
            total_winnings: 0,
            created_at: NOW,
            bump: 255,
        }
    }

    fn err(e: MatchBetError) -> anchor_lang::error::Error {
        e.into()
    }

    #[test]
    fn accepts_bet_at_minimum_before_start() {
        let user = funded_user(2_000_000_000);
        check_bet(&config(), &open_match(), &user, false, MIN, 0, 0, NOW).unwrap();
        check_bet(&config(), &open_match(), &user, false, MIN, 1, 0, NOW + 59).unwrap();
    }

    #[test]
    fn paused_platform_wins_over_every_other_failure() {
        let mut c = config();
        c.is_paused = true;
        let mut m = open_match();
        m.is_betting_closed = true;
        let user = funded_user(0);

        assert_eq!(
            check_bet(&c, &m, &user, true, 0, 9, 0, NOW + 1_000).unwrap_err(),
            err(MatchBetError::PlatformPaused)
        );
    }

    #[test]
    fn betting_closed_by_flag_clock_or_status() {
        let user = funded_user(2_000_000_000);
        let c = config();

        let mut forced = open_match();
        forced.close_betting();
        assert_eq!(
            check_bet(&c, &forced, &user, false, MIN, 0, 0, NOW).unwrap_err(),
            err(MatchBetError::BettingClosed)
        );

        assert_eq!(
            check_bet(&c, &open_match(), &user, false, MIN, 0, 0, NOW + 60).unwrap_err(),
            err(MatchBetError::BettingClosed)
        );

        let mut cancelled = open_match();
        cancelled.status = MatchStatus::Cancelled;
        assert_eq!(
            check_bet(&c, &cancelled, &user, false, MIN, 0, 0, NOW).unwrap_err(),
            err(MatchBetError::BettingClosed)
        );
    }

    #[test]
    fn second_bet_on_same_match_is_rejected_regardless_of_amount() {
        let user = funded_user(2_000_000_000);
        for amount in [0, MIN, MAX + 1, u64::MAX] {
            assert_eq!(
                check_bet(&config(), &open_match(), &user, true, amount, 0, 0, NOW).unwrap_err(),
                err(MatchBetError::AlreadyExists)
            );
        }
    }

    #[test]
    fn amount_limits() {
        let user = funded_user(u64::MAX);
        assert_eq!(
            check_bet(&config(), &open_match(), &user, false, MIN - 1, 0, 0, NOW).unwrap_err(),
            err(MatchBetError::BetAmountTooLow)
        );
        check_bet(&config(), &open_match(), &user, false, MAX, 0, 0, NOW).unwrap();
        assert_eq!(
            check_bet(&config(), &open_match(), &user, false, MAX + 1, 0, 0, NOW).unwrap_err(),
            err(MatchBetError::BetAmountTooHigh)
        );
    }

    #[test]
    fn team_is_checked_before_balance() {
        let user = funded_user(0);
        assert_eq!(
            check_bet(&config(), &open_match(), &user, false, MIN, 2, 0, NOW).unwrap_err(),
            err(MatchBetError::InvalidInput)
        );
        assert_eq!(
            check_bet(&config(), &open_match(), &user, false, MIN, 1, 0, NOW).unwrap_err(),
            err(MatchBetError::InsufficientBalance)
        );
    }

    #[test]
    fn odds_guard_accepts_quote_at_or_below_current_odds() {
        let user = funded_user(2_000_000_000);
        let mut m = open_match();
        m.add_stake(0, 3_000_000).unwrap();
        m.add_stake(1, 1_000_000).unwrap();

        check_bet(&config(), &m, &user, false, MIN, 0, 3_333, NOW).unwrap();
        check_bet(&config(), &m, &user, false, MIN, 1, 30_000, NOW).unwrap();
        check_bet(&config(), &m, &user, false, MIN, 1, 0, NOW).unwrap();
    }

    #[test]
    fn odds_guard_rejects_moved_pools() {
        let user = funded_user(2_000_000_000);
        let mut m = open_match();
        m.add_stake(0, 3_000_000).unwrap();
        m.add_stake(1, 1_000_000).unwrap();

        assert_eq!(
            check_bet(&config(), &m, &user, false, MIN, 0, 3_334, NOW).unwrap_err(),
            err(MatchBetError::OddsMoved)
        );
        assert_eq!(
            check_bet(&config(), &m, &user, false, MIN, 0, u64::MAX, NOW).unwrap_err(),
            err(MatchBetError::OddsMoved)
        );
    }

    #[test]
    fn odds_guard_runs_after_balance_check() {
        let mut m = open_match();
        m.add_stake(0, 3_000_000).unwrap();
        assert_eq!(
            check_bet(&config(), &m, &funded_user(0), false, MIN, 0, u64::MAX, NOW).unwrap_err(),
            err(MatchBetError::InsufficientBalance)
        );
    }
}
