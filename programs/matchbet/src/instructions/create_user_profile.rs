use anchor_lang::prelude::*;

use crate::events::UserProfileCreated;
use crate::state::UserAccount;

#[derive(Accounts)]
pub struct CreateUserProfile<'info> {
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [UserAccount::SEED, owner.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateUserProfile>, username: String) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    ctx.accounts.user_account.initialize(
        owner,
        username.clone(),
        clock.unix_timestamp,
        ctx.bumps.user_account,
    )?;

    emit!(UserProfileCreated {
        owner,
        username,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
