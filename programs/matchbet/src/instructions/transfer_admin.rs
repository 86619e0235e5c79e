use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::AdminTransferred;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(
        mut,
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub admin: Signer<'info>,
}

pub fn handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let previous_admin = ctx.accounts.global_config.set_admin(new_admin)?;

    msg!("Admin transferred from {} to {}", previous_admin, new_admin);

    emit!(AdminTransferred {
        previous_admin,
        new_admin,
    });

    Ok(())
}
