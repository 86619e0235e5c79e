use anchor_lang::prelude::*;

use crate::events::PlatformInitialized;
use crate::state::{GlobalConfig, Treasury};
use crate::utils::transfer_into_vault;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + GlobalConfig::INIT_SPACE,
        seeds = [GlobalConfig::SEED],
        bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Treasury::INIT_SPACE,
        seeds = [Treasury::SEED],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// System-owned PDA holding custodial lamports.
    #[account(
        mut,
        seeds = [Treasury::VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.global_config;
    config.initialize(admin, clock.unix_timestamp, ctx.bumps.global_config)?;

    // Keep the vault rent exempt so withdrawals can drain custody to zero.
    let rent_exempt = Rent::get()?.minimum_balance(0);
    let vault_lamports = ctx.accounts.vault.to_account_info().lamports();
    if vault_lamports < rent_exempt {
        transfer_into_vault(
            &ctx.accounts.system_program,
            &ctx.accounts.payer,
            &ctx.accounts.vault,
            rent_exempt - vault_lamports,
        )?;
    }

    let treasury = &mut ctx.accounts.treasury;
    treasury.total_deposits = 0;
    treasury.total_withdrawals = 0;
    treasury.platform_fees_accrued = 0;
    treasury.custodial_balance = 0;
    treasury.total_wagered = 0;
    treasury.bump = ctx.bumps.treasury;
    treasury.vault_bump = ctx.bumps.vault;

    emit!(PlatformInitialized {
        admin,
        house_edge_bps: config.house_edge_bps,
        min_bet_amount: config.min_bet_amount,
        max_bet_amount: config.max_bet_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
