use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::MatchStatusUpdated;
use crate::state::{GlobalConfig, MatchRecord, MatchStatus};

#[derive(Accounts)]
pub struct UpdateMatchStatus<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [MatchRecord::SEED, match_record.match_id.as_ref()],
        bump = match_record.bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateMatchStatus>, new_status: MatchStatus) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.match_record;
    let old_status = record.status;

    record.sync_betting_window(now);

    record.transition_to(new_status)?;

    emit!(MatchStatusUpdated {
        match_id: record.match_id,
        old_status,
        new_status,
    });

    Ok(())
}
