use anchor_lang::prelude::*;

use crate::state::Lottery;

#[event]
pub struct DrawScheduled {
    pub lottery: Pubkey,
    pub ticket_count: u64,
    pub timestamp: i64,
}

/// Closes ticket sales and schedules the draw.
///
/// Only the lottery authority may call this, and only once at least one
/// ticket has been sold.
pub fn schedule_draw(ctx: Context<ScheduleDraw>) -> Result<()> {
    let signers = [ctx.accounts.authority.key()];
    ctx.accounts.lottery.schedule_draw(&signers)?;

    emit!(DrawScheduled {
        lottery: ctx.accounts.lottery.key(),
        ticket_count: ctx.accounts.lottery.ticket_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ScheduleDraw<'info> {
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    pub authority: Signer<'info>,
}
