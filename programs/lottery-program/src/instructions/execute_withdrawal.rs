use anchor_lang::prelude::*;

use crate::state::Treasury;

/// Event emitted when treasury funds are withdrawn
#[event]
pub struct WithdrawalExecuted {
    /// The pubkey of the treasury
    pub treasury: Pubkey,
    /// Amount withdrawn in lamports
    pub amount: u64,
    pub destination: Pubkey,
    pub authority: Pubkey,
    pub additional_signer: Pubkey,
    pub timestamp: i64,
}

/// Instruction to execute a queued treasury withdrawal
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. A withdrawal must be pending
/// 2. The treasury authority must sign
/// 3. The timelock recorded at request time must have elapsed
/// 4. The additional signer named at request time must co-sign
/// 5. The destination must be the one named at request time
///
/// # Implementation Notes
/// - The pending record is cleared and the balance debited before lamports move
/// - A second call fails with `NoPendingWithdrawal`
pub fn execute_withdrawal(ctx: Context<ExecuteWithdrawal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Cosigner signature is optional at the account level; the pending record decides
    let mut signers = vec![ctx.accounts.authority.key()];
    if ctx.accounts.additional_signer.is_signer {
        signers.push(ctx.accounts.additional_signer.key());
    }

    let destination = ctx.accounts.destination.key();
    let pending = ctx
        .accounts
        .treasury
        .execute_withdrawal(&signers, &destination, now)?;

    // Treasury is program-owned, so lamports move without a system transfer
    ctx.accounts
        .treasury
        .to_account_info()
        .sub_lamports(pending.amount)?;
    ctx.accounts
        .destination
        .to_account_info()
        .add_lamports(pending.amount)?;

    emit!(WithdrawalExecuted {
        treasury: ctx.accounts.treasury.key(),
        amount: pending.amount,
        destination,
        authority: ctx.accounts.authority.key(),
        additional_signer: pending.additional_signer,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ExecuteWithdrawal<'info> {
    #[account(mut)]
    pub treasury: Account<'info, Treasury>,

    pub authority: Signer<'info>,

    /// CHECK: Signature and key are checked against the pending withdrawal.
    pub additional_signer: UncheckedAccount<'info>,

    /// CHECK: Key is checked against the pending withdrawal; only receives lamports.
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}
