use anchor_lang::prelude::*;

use crate::errors::MatchBetError;
use crate::events::MatchCreated;
use crate::state::{GlobalConfig, MatchRecord, MatchStatus};

#[derive(Accounts)]
#[instruction(match_id: Pubkey)]
pub struct CreateMatch<'info> {
    #[account(
        seeds = [GlobalConfig::SEED],
        bump = global_config.bump,
        constraint = global_config.is_admin(&admin.key()) @ MatchBetError::Unauthorized,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + MatchRecord::INIT_SPACE,
        seeds = [MatchRecord::SEED, match_id.as_ref()],
        bump,
    )]
    pub match_record: Account<'info, MatchRecord>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateMatch>,
    match_id: Pubkey,
    team1: String,
    team2: String,
    start_time: i64,
    end_time: i64,
    description: String,
) -> Result<()> {
    require!(match_id != Pubkey::default(), MatchBetError::InvalidInput);
    require!(
        !ctx.accounts.match_record.is_initialized(),
        MatchBetError::AlreadyExists
    );

    let clock = Clock::get()?;
    MatchRecord::validate_details(
        &team1,
        &team2,
        &description,
        start_time,
        end_time,
        clock.unix_timestamp,
    )?;

    let record = &mut ctx.accounts.match_record;

    record.match_id = match_id;
    record.team1 = team1.clone();
    record.team2 = team2.clone();
    record.description = description;
    record.start_time = start_time;
    record.end_time = end_time;
    record.total_pool = 0;
    record.team_pools = [0, 0];
    record.total_bets = 0;
    record.status = MatchStatus::Scheduled;
    record.is_betting_closed = false;
    record.winning_team = None;
    record.result_notes = String::new();
    record.resolved_by = None;
    record.fee_collected = 0;
    record.distributable_pool = 0;
    record.created_at = clock.unix_timestamp;
    record.bump = ctx.bumps.match_record;

    emit!(MatchCreated {
        match_id,
        team1,
        team2,
        start_time,
        end_time,
    });

    Ok(())
}
