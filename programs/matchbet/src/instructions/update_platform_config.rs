use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::PlatformConfigUpdated;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct UpdatePlatformConfig<'info> {
    #[account(
        mut,
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,
}

pub fn handler(
    ctx: Context<UpdatePlatformConfig>,
    house_edge_bps: u16,
    min_bet_amount: u64,
    max_bet_amount: u64,
) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.apply_config(house_edge_bps, min_bet_amount, max_bet_amount)?;

    emit!(PlatformConfigUpdated {
        admin: ctx.accounts.admin.key(),
        house_edge_bps,
        min_bet_amount,
        max_bet_amount,
    });

    Ok(())
}
