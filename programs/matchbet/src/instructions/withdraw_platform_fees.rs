use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::TreasuryWithdrawal;
use crate::state::{GlobalConfig, Treasury};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
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
        seeds = [Treasury::VAULT_SEED],
        bump = treasury.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPlatformFees>, amount: u64) -> Result<()> {
    require!(amount > 0, MatchBetError::InvalidAmount);

    let treasury = &mut ctx.accounts.treasury;
    treasury.withdraw_fees(amount)?;

    transfer_from_vault(
        &ctx.accounts.system_program,
        &ctx.accounts.vault,
        treasury.vault_bump,
        ctx.accounts.admin.to_account_info(),
        amount,
    )?;

    emit!(TreasuryWithdrawal {
        admin: ctx.accounts.admin.key(),
        amount,
        is_fee_withdrawal: true,
        custodial_balance: treasury.custodial_balance,
    });

    Ok(())
}
