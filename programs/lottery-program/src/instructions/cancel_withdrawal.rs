use anchor_lang::prelude::*;

use crate::state::Treasury;

#[event]
pub struct WithdrawalCancelled {
    pub treasury: Pubkey,
    pub amount: u64,
}

/// Drops the pending withdrawal. No funds move.
pub fn cancel_withdrawal(ctx: Context<CancelWithdrawal>) -> Result<()> {
    let signers = [ctx.accounts.authority.key()];
    let cancelled = ctx.accounts.treasury.cancel_withdrawal(&signers)?;

    emit!(WithdrawalCancelled {
        treasury: ctx.accounts.treasury.key(),
        amount: cancelled.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelWithdrawal<'info> {
    #[account(mut)]
    pub treasury: Account<'info, Treasury>,

    pub authority: Signer<'info>,
}
