use anchor_lang::{prelude::*, solana_program::sysvar::instructions as instructions_sysvar};

use crate::{
    error::LotteryError,
    state::Lottery,
    vrf::{self, Ed25519Verifier},
};

/// Event emitted once a random value has passed verification
#[event]
pub struct RandomnessVerified {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The verified random value
    pub value: [u8; 32],
    /// Request nonce the proof was bound to
    pub nonce: u64,
    /// Index of the winning ticket
    pub winning_index: u64,
}

/// Feeds an oracle-signed random value into the lottery.
///
/// The transaction must carry an Ed25519 precompile instruction directly
/// before this one, signed by the lottery's oracle over
/// `vrf::vrf_message(lottery, nonce)`, with `proof` as its signature. `value`
/// must equal `vrf::randomness_from_proof(proof)`.
///
/// # Errors
/// - `Unauthorized` if the signer is not the lottery authority
/// - `AlreadyVerified` if randomness was already accepted
/// - `InvalidStateTransition` if no randomness has been requested yet
/// - `VrfVerificationFailed` if the proof does not check out
/// - `InvalidInstructionsSysvar` if the provided sysvar account is invalid
pub fn submit_vrf(ctx: Context<SubmitVrf>, proof: [u8; 64], value: [u8; 32]) -> Result<()> {
    // Manually validate the instructions sysvar account
    require_keys_eq!(
        ctx.accounts.instructions.key(),
        instructions_sysvar::ID,
        LotteryError::InvalidInstructionsSysvar
    );

    let lottery_key = ctx.accounts.lottery.key();
    let signers = [ctx.accounts.authority.key()];
    let instructions = ctx.accounts.instructions.to_account_info();
    let verifier = Ed25519Verifier::new(&instructions, lottery_key, &ctx.accounts.lottery);

    let winning_index = vrf::submit(
        &mut ctx.accounts.lottery,
        &signers,
        &proof,
        value,
        &verifier,
    )?;

    emit!(RandomnessVerified {
        lottery: lottery_key,
        value,
        nonce: ctx.accounts.lottery.vrf_request_nonce,
        winning_index,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SubmitVrf<'info> {
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    pub authority: Signer<'info>,

    /// The Instructions sysvar, used to inspect the Ed25519 precompile call
    /// CHECK: Address is validated manually in the handler.
    pub instructions: UncheckedAccount<'info>,
}
