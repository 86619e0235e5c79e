use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::BetCancelled;
use crate::state::{BetRecord, MatchRecord, Treasury, UserAccount};

#[derive(Accounts)]
pub struct CancelBet<'info> {
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

    /// Closed on success; rent goes back to the bettor.
    #[account(
        mut,
        seeds = [
            BetRecord::SEED,
            bettor.key().as_ref(),
            match_record.match_id.as_ref(),
        ],
        bump = bet_record.bump,
        close = bettor,
    )]
    pub bet_record: Account<'info, BetRecord>,

    #[account(mut)]
    pub bettor: Signer<'info>,
}

/// Returns a still-open bet's stake to the bettor's balance and backs it
/// out of the match pools.
pub fn unwind_bet(
    record: &mut MatchRecord,
    user: &mut UserAccount,
    bet: &BetRecord,
    now: i64,
) -> Result<u64> {
    require!(!bet.settled, MatchBetError::AlreadySettled);
    require!(record.is_betting_open(now), MatchBetError::BettingClosed);

    record.remove_stake(bet.predicted_team, bet.amount)?;
    user.unstake(bet.amount)?;
    Ok(bet.amount)
}

pub fn handler(ctx: Context<CancelBet>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let refund = unwind_bet(
        &mut ctx.accounts.match_record,
        &mut ctx.accounts.user_account,
        &ctx.accounts.bet_record,
        now,
    )?;
    ctx.accounts.treasury.release_wager(refund)?;

    emit!(BetCancelled {
        bettor: ctx.accounts.bettor.key(),
        match_id: ctx.accounts.match_record.match_id,
        refund_amount: refund,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MatchStatus;

    const NOW: i64 = 1_700_000_000;

    fn open_match() -> MatchRecord {
        MatchRecord {
            match_id: Pubkey::new_unique(),
            team1: "Home".to_string(),
            team2: "Away".to_string(),
            description: String::new(),
            start_time: NOW + 60,
            end_time: NOW + 7_200,
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

    fn staked(record: &mut MatchRecord, amount: u64, team: u8) -> (UserAccount, BetRecord) {
        let owner = Pubkey::new_unique();
        let mut user = UserAccount {
            owner,
            username: "Bob".to_string(),
            balance: amount * 2,
            total_bets_placed: 0,
            total_bets_won: 0,
            total_wagered: 0,
            total_winnings: 0,
            created_at: NOW,
            bump: 255,
        };
        user.stake(amount).unwrap();
        record.add_stake(team, amount).unwrap();
        let bet = BetRecord {
            bettor: owner,
            match_id: record.match_id,
            amount,
            predicted_team: team,
            odds_accepted_bps: 0,
            placed_at: NOW,
            settled: false,
            payout: 0,
            settled_at: None,
            bump: 255,
        };
        (user, bet)
    }

    #[test]
    fn cancel_before_start_restores_balance_and_pools() {
        let mut record = open_match();
        let (mut user, bet) = staked(&mut record, 5_000_000, 1);

        let refund = unwind_bet(&mut record, &mut user, &bet, NOW + 30).unwrap();

        assert_eq!(refund, 5_000_000);
        assert_eq!(user.balance, 10_000_000);
        assert_eq!(user.total_bets_placed, 0);
        assert_eq!(record.team_pools, [0, 0]);
        assert_eq!(record.total_pool, 0);
        assert_eq!(record.total_bets, 0);
    }

    #[test]
    fn cancel_after_close_is_rejected() {
        let mut record = open_match();
        let (mut user, bet) = staked(&mut record, 5_000_000, 0);

        assert_eq!(
            unwind_bet(&mut record, &mut user, &bet, NOW + 60).unwrap_err(),
            MatchBetError::BettingClosed.into()
        );

        record.close_betting();
        assert_eq!(
            unwind_bet(&mut record, &mut user, &bet, NOW).unwrap_err(),
            MatchBetError::BettingClosed.into()
        );
        assert_eq!(record.total_pool, 5_000_000);
        assert_eq!(user.balance, 5_000_000);
    }
}
