use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::PlatformPauseToggled;
use crate::state::GlobalConfig;

/// Shared by `pause_platform` and `unpause_platform`.
#[derive(Accounts)]
pub struct PausePlatform<'info> {
    #[account(
        mut,
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<PausePlatform>, paused: bool) -> Result<()> {
    ctx.accounts.global_config.is_paused = paused;

    msg!("Platform paused: {}", paused);

    emit!(PlatformPauseToggled {
        admin: ctx.accounts.admin.key(),
        is_paused: paused,
    });

    Ok(())
}
