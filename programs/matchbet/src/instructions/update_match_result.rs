use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::MatchResultReported;
use crate::state::{GlobalConfig, MatchRecord, OracleRegistration, Treasury};

#[derive(Accounts)]
pub struct UpdateMatchResult<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
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
        seeds = [MatchRecord::SEED, match_record.match_id.as_ref()],
        bump = match_record.bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    /// CHECK: address is pinned to (oracle, match); ownership and contents
    /// are verified in the handler so a missing registration reads as
    /// Unauthorized.
    #[account(
        mut,
        seeds = [
            OracleRegistration::SEED,
            oracle.key().as_ref(),
            match_record.match_id.as_ref(),
        ],
        bump,
    )]
    pub oracle_registration: UncheckedAccount<'info>,

    pub oracle: Signer<'info>,
}

fn load_registration(info: &AccountInfo) -> Result<OracleRegistration> {
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        MatchBetError::Unauthorized
    );
    let data = info.try_borrow_data()?;
    OracleRegistration::try_deserialize(&mut &data[..])
        .map_err(|_| error!(MatchBetError::Unauthorized))
}

pub fn handler(ctx: Context<UpdateMatchResult>, winning_team: u8, notes: String) -> Result<()> {
    let oracle = ctx.accounts.oracle.key();
    let registration_info = ctx.accounts.oracle_registration.to_account_info();
    let mut registration = load_registration(&registration_info)?;

    let record = &mut ctx.accounts.match_record;
    require!(
        registration.authorizes(&oracle, &record.match_id),
        MatchBetError::Unauthorized
    );

    let fee = record.record_result(winning_team, notes, oracle, &ctx.accounts.global_config)?;
    ctx.accounts.treasury.accrue_fee(fee)?;

    let clock = Clock::get()?;
    registration.reported_result = Some(winning_team);
    registration.reported_at = Some(clock.unix_timestamp);
    {
        let mut data = registration_info.try_borrow_mut_data()?;
        registration.try_serialize(&mut &mut data[..])?;
    }

    msg!(
        "Match {} completed by oracle {}: team {} wins",
        record.match_id,
        oracle,
        winning_team
    );

    emit!(MatchResultReported {
        match_id: record.match_id,
        oracle_authority: oracle,
        winning_team,
        fee_collected: fee,
        distributable_pool: record.distributable_pool,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
