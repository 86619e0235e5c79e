use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::state::Treasury;

/// Moves lamports from a user wallet into the custody vault.
pub fn transfer_into_vault<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    vault: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: from.to_account_info(),
            to: vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Pays lamports out of the custody vault, signing with the vault PDA.
pub fn transfer_from_vault<'info>(
    system_program: &Program<'info, System>,
    vault: &SystemAccount<'info>,
    vault_bump: u8,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let bump_bytes = [vault_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Treasury::VAULT_SEED, &bump_bytes]];

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Transfer {
            from: vault.to_account_info(),
            to,
        },
        signer_seeds,
    );
    system_program::transfer(cpi_ctx, amount)
}
