use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::OracleRegistered;
use crate::state::{GlobalConfig, MatchRecord, OracleRegistration};

#[derive(Accounts)]
#[instruction(oracle_authority: Pubkey)]
pub struct RegisterOracle<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        seeds = [MatchRecord::SEED, match_record.match_id.as_ref()],
        bump = match_record.bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + OracleRegistration::INIT_SPACE,
        seeds = [
            OracleRegistration::SEED,
            oracle_authority.as_ref(),
            match_record.match_id.as_ref(),
        ],
        bump,
    )]
    pub oracle_registration: Account<'info, OracleRegistration>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterOracle>, oracle_authority: Pubkey) -> Result<()> {
    require!(
        oracle_authority != Pubkey::default(),
        MatchBetError::InvalidInput
    );
    require!(
        !ctx.accounts.oracle_registration.is_initialized(),
        MatchBetError::AlreadyExists
    );

    let match_id = ctx.accounts.match_record.match_id;
    let registration = &mut ctx.accounts.oracle_registration;
    registration.oracle_authority = oracle_authority;
    registration.match_id = match_id;
    registration.reported_result = None;
    registration.reported_at = None;
    registration.bump = ctx.bumps.oracle_registration;

    emit!(OracleRegistered {
        oracle_authority,
        match_id,
    });

    Ok(())
}
