use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::FundsWithdrawn;
use crate::state::{Treasury, UserAccount};
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(
        mut,
        seeds = [UserAccount::SEED, user_account.owner.as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == owner.key() @ MatchBetError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,

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
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Books a withdrawal on both sides of the ledger.
pub fn apply_withdrawal(user: &mut UserAccount, treasury: &mut Treasury, amount: u64) -> Result<()> {
    require!(amount > 0, MatchBetError::InvalidAmount);
    user.debit(amount)?;
    treasury.record_withdrawal(amount)
}

pub fn handler(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    let user = &mut ctx.accounts.user_account;
    let treasury = &mut ctx.accounts.treasury;
    apply_withdrawal(user, treasury, amount)?;

    transfer_from_vault(
        &ctx.accounts.system_program,
        &ctx.accounts.vault,
        treasury.vault_bump,
        ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    emit!(FundsWithdrawn {
        owner: user.owner,
        amount,
        new_balance: user.balance,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::deposit_funds::apply_deposit;

    fn user() -> UserAccount {
        UserAccount {
            owner: Pubkey::new_unique(),
            username: "Bob".to_string(),
            balance: 0,
            total_bets_placed: 0,
            total_bets_won: 0,
            total_wagered: 0,
            total_winnings: 0,
            created_at: 0,
            bump: 255,
        }
    }

    fn treasury() -> Treasury {
        Treasury {
            total_deposits: 0,
            total_withdrawals: 0,
            platform_fees_accrued: 0,
            custodial_balance: 0,
            total_wagered: 0,
            bump: 254,
            vault_bump: 253,
        }
    }

    #[test]
    fn round_trip_keeps_custody_balanced() {
        let mut bob = user();
        let mut t = treasury();

        apply_deposit(&mut bob, &mut t, 3_000).unwrap();
        apply_withdrawal(&mut bob, &mut t, 1_200).unwrap();

        assert_eq!(bob.balance, 1_800);
        assert_eq!(t.custodial_balance, 1_800);
        assert_eq!(t.total_withdrawals, 1_200);
        assert!(t.is_balanced());
    }

    #[test]
    fn overdraw_is_rejected() {
        let mut bob = user();
        let mut t = treasury();
        apply_deposit(&mut bob, &mut t, 500).unwrap();

        assert_eq!(
            apply_withdrawal(&mut bob, &mut t, 501).unwrap_err(),
            MatchBetError::InsufficientBalance.into()
        );
        assert_eq!(
            apply_withdrawal(&mut bob, &mut t, 0).unwrap_err(),
            MatchBetError::InvalidAmount.into()
        );
    }
}
