use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::MatchBettingClosed;
use crate::state::{GlobalConfig, MatchRecord};

#[derive(Accounts)]
pub struct CloseMatchBetting<'info> {
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

pub fn handler(ctx: Context<CloseMatchBetting>) -> Result<()> {
    let record = &mut ctx.accounts.match_record;
    record.close_betting();

    emit!(MatchBettingClosed {
        match_id: record.match_id,
        total_pool: record.total_pool,
    });

    Ok(())
}
