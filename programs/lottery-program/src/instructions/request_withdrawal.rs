use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Treasury, TIMELOCK_DURATION},
};

/// Event emitted when a treasury withdrawal is queued
#[event]
pub struct WithdrawalRequested {
    pub treasury: Pubkey,
    pub amount: u64,
    pub destination: Pubkey,
    pub additional_signer: Pubkey,
    pub unlock_time: i64,
}

/// Instruction to queue a withdrawal from a treasury
///
/// # Security Considerations
/// 1. Only the treasury authority may queue a withdrawal
/// 2. Only one withdrawal may be pending at a time
/// 3. Prize money owed to an unsettled round cannot be requested
/// 4. Execution needs a second signer that differs from the authority, and
///    is blocked until `TIMELOCK_DURATION` has passed
/// 5. The destination cannot be the treasury itself
pub fn request_withdrawal(
    ctx: Context<RequestWithdrawal>,
    amount: u64,
    destination: Pubkey,
    additional_signer: Pubkey,
) -> Result<()> {
    require_keys_neq!(
        destination,
        ctx.accounts.treasury.key(),
        LotteryError::InvalidDestination
    );

    let now = Clock::get()?.unix_timestamp;
    let signers = [ctx.accounts.authority.key()];

    let pending = ctx.accounts.treasury.request_withdrawal(
        &signers,
        amount,
        destination,
        additional_signer,
        now,
    )?;

    msg!(
        "Withdrawal of {} queued, unlocks in {}s",
        amount,
        TIMELOCK_DURATION
    );

    emit!(WithdrawalRequested {
        treasury: ctx.accounts.treasury.key(),
        amount,
        destination,
        additional_signer,
        unlock_time: pending.unlock_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestWithdrawal<'info> {
    #[account(mut)]
    pub treasury: Account<'info, Treasury>,

    pub authority: Signer<'info>,
}
