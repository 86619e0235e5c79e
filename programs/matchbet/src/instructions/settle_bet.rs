use anchor_lang::prelude::*;

use crate::events::BetSettled;
use crate::state::{BetRecord, MatchRecord, MatchStatus, UserAccount};

#[derive(Accounts)]
pub struct SettleBet<'info> {
    #[account(
        seeds = [MatchRecord::SEED, match_record.match_id.as_ref()],
        bump = match_record.bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    #[account(
        mut,
        seeds = [UserAccount::SEED, bet_record.bettor.as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(
        mut,
        seeds = [
            BetRecord::SEED,
            bet_record.bettor.as_ref(),
            match_record.match_id.as_ref(),
        ],
        bump = bet_record.bump,
    )]
    pub bet_record: Account<'info, BetRecord>,

    /// Anyone may crank settlement; value only moves to the bettor.
    pub caller: Signer<'info>,
}

/// Credits the bettor with what the final match owes this bet.
/// Returns the payout and whether the bet won.
pub fn apply_settlement(
    record: &MatchRecord,
    bet: &mut BetRecord,
    user: &mut UserAccount,
    now: i64,
) -> Result<(u64, bool)> {
    let payout = record.payout_for(bet.amount, bet.predicted_team)?;
    bet.mark_settled(payout, now)?;

    let won = record.status == MatchStatus::Completed
        && record.winning_team == Some(bet.predicted_team)
        && record.team_pools[usize::from(bet.predicted_team)] > 0;
    if won {
        user.record_win(payout)?;
    } else if payout > 0 {
        user.credit(payout)?;
    }
    Ok((payout, won))
}

pub fn handler(ctx: Context<SettleBet>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let (payout, won) = apply_settlement(
        &ctx.accounts.match_record,
        &mut ctx.accounts.bet_record,
        &mut ctx.accounts.user_account,
        now,
    )?;

    let bet = &ctx.accounts.bet_record;
    emit!(BetSettled {
        bettor: bet.bettor,
        match_id: bet.match_id,
        amount: bet.amount,
        payout,
        won,
    });

    Ok(())
}
