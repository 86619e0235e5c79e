use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::UserProfileUpdated;
use crate::state::UserAccount;

#[derive(Accounts)]
pub struct UpdateUserProfile<'info> {
    #[account(
        mut,
        seeds = [UserAccount::SEED, user_account.owner.as_ref()],
        bump = user_account.bump,
        constraint = user_account.owner == owner.key() @ MatchBetError::Unauthorized,
    )]
    pub user_account: Account<'info, UserAccount>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateUserProfile>, username: String) -> Result<()> {
    UserAccount::validate_username(&username)?;

    ctx.accounts.user_account.username = username.clone();

    emit!(UserProfileUpdated {
        owner: ctx.accounts.owner.key(),
        username,
    });

    Ok(())
}
