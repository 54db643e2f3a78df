use anchor_lang::prelude::*;

use crate::state::Config;

#[event]
pub struct FeeUpdated {
    pub admin: Pubkey,
    pub previous_fee_bps: u16,
    pub fee_bps: u16,
}

/// Sets the protocol fee for lotteries created after this call. Admin only.
pub fn update_fee(ctx: Context<UpdateFee>, fee_bps: u16) -> Result<()> {
    let signers = [ctx.accounts.admin.key()];
    let previous_fee_bps = ctx.accounts.config.set_fee(&signers, fee_bps)?;

    emit!(FeeUpdated {
        admin: ctx.accounts.admin.key(),
        previous_fee_bps,
        fee_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub admin: Signer<'info>,
}
