use anchor_lang::prelude::*;

use crate::state::Lottery;

/// Event picked up by the oracle: it signs the message for this lottery and nonce
#[event]
pub struct RandomnessRequested {
    pub lottery: Pubkey,
    pub vrf_oracle: Pubkey,
    pub nonce: u64,
    pub requested_at: i64,
}

/// Moves a scheduled lottery to AwaitingVrf and opens a randomness request.
///
/// Calling it again while awaiting randomness is only allowed after
/// `VRF_TIMEOUT`; it bumps the nonce, which voids any proof produced for the
/// previous request.
pub fn request_randomness(ctx: Context<RequestRandomness>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let signers = [ctx.accounts.authority.key()];
    let nonce = ctx.accounts.lottery.request_randomness(&signers, now)?;

    msg!("Randomness requested, nonce {}", nonce);

    emit!(RandomnessRequested {
        lottery: ctx.accounts.lottery.key(),
        vrf_oracle: ctx.accounts.lottery.vrf_oracle,
        nonce,
        requested_at: now,
    });

    Ok(nonce)
}

#[derive(Accounts)]
pub struct RequestRandomness<'info> {
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    pub authority: Signer<'info>,
}
