use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::FundsDeposited;
use crate::state::{Treasury, UserAccount};
use crate::utils::transfer_into_vault;

#[derive(Accounts)]
pub struct DepositFunds<'info> {
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

/// Books a deposit on both sides of the ledger.
pub fn apply_deposit(user: &mut UserAccount, treasury: &mut Treasury, amount: u64) -> Result<()> {
    require!(amount > 0, MatchBetError::InvalidAmount);
    user.credit(amount)?;
    treasury.record_deposit(amount)
}

pub fn handler(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
    require!(amount > 0, MatchBetError::InvalidAmount);

    transfer_into_vault(
        &ctx.accounts.system_program,
        &ctx.accounts.owner,
        &ctx.accounts.vault,
        amount,
    )?;

    let user = &mut ctx.accounts.user_account;
    apply_deposit(user, &mut ctx.accounts.treasury, amount)?;

    emit!(FundsDeposited {
        owner: user.owner,
        amount,
        new_balance: user.balance,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserAccount {
        UserAccount {
            owner: Pubkey::new_unique(),
            username: "Alice".to_string(),
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
    fn deposit_reaches_user_and_treasury() {
        let mut alice = user();
        let mut t = treasury();

        apply_deposit(&mut alice, &mut t, 2_000_000_000).unwrap();

        assert_eq!(alice.balance, 2_000_000_000);
        assert_eq!(t.total_deposits, 2_000_000_000);
        assert_eq!(t.custodial_balance, 2_000_000_000);
        assert!(t.is_balanced());
    }

    #[test]
    fn zero_deposit_changes_nothing() {
        let mut alice = user();
        let mut t = treasury();
        assert_eq!(
            apply_deposit(&mut alice, &mut t, 0).unwrap_err(),
            MatchBetError::InvalidAmount.into()
        );
        assert_eq!(alice.balance, 0);
        assert_eq!(t.total_deposits, 0);
    }
}
