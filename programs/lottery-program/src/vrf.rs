//! Verification gate for externally supplied randomness.
//!
//! A random value is only allowed to drive a draw once a [`RandomnessVerifier`]
//! has accepted its proof. On chain the proof is an Ed25519 signature by the
//! lottery's oracle over [`vrf_message`], checked by the Ed25519 precompile in
//! the instruction right before `submit_vrf`. The value itself is the hash of
//! that signature, so the oracle cannot choose it and every request admits a
//! single value.

use anchor_lang::{
    prelude::*,
    solana_program::{
        ed25519_program,
        hash::hashv,
        sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
    },
};
use arrayref::array_ref;

use crate::{
    error::LotteryError,
    state::{Lottery, LotteryStatus},
};

pub const VRF_DOMAIN: &[u8] = b"lottery-vrf";

pub const PUBKEY_SERIALIZED_SIZE: usize = 32;
pub const SIGNATURE_SERIALIZED_SIZE: usize = 64;
pub const SIGNATURE_OFFSETS_SERIALIZED_SIZE: usize = 14;
pub const SIGNATURE_OFFSETS_START: usize = 2;

/// Instruction index meaning "the Ed25519 instruction itself".
const CURRENT_INSTRUCTION: u16 = u16::MAX;

/// Checks that `proof` attests to `value`.
pub trait RandomnessVerifier {
    fn verify(&self, proof: &[u8; 64], value: &[u8; 32]) -> bool;
}

/// The bytes the oracle signs: domain tag, lottery and request nonce.
pub fn vrf_message(lottery: &Pubkey, nonce: u64) -> Vec<u8> {
    let mut message = Vec::with_capacity(VRF_DOMAIN.len() + 32 + 8);
    message.extend_from_slice(VRF_DOMAIN);
    message.extend_from_slice(lottery.as_ref());
    message.extend_from_slice(&nonce.to_le_bytes());
    message
}

/// The random value carried by a proof.
pub fn randomness_from_proof(proof: &[u8; 64]) -> [u8; 32] {
    hashv(&[VRF_DOMAIN, proof]).to_bytes()
}

/// Returns true when `value` is the one carried by `proof`, and `data` is a
/// precompile payload in which `oracle` produced `proof` over the message of
/// request `nonce`.
pub fn proof_attests(
    data: &[u8],
    oracle: &Pubkey,
    lottery: &Pubkey,
    nonce: u64,
    proof: &[u8; 64],
    value: &[u8; 32],
) -> bool {
    if *value != randomness_from_proof(proof) {
        msg!("Submitted value is not derived from the proof");
        return false;
    }
    ed25519_instruction_matches(data, oracle, &vrf_message(lottery, nonce), proof)
}

/// Runs a randomness submission through the gate.
///
/// Only the lottery authority may submit, and only while the lottery awaits
/// randomness. A rejected proof leaves the lottery untouched; the authority
/// has to request fresh randomness, which invalidates the rejected proof.
pub fn submit<V: RandomnessVerifier>(
    lottery: &mut Lottery,
    signers: &[Pubkey],
    proof: &[u8; 64],
    value: [u8; 32],
    verifier: &V,
) -> Result<u64> {
    require!(
        signers.contains(&lottery.authority),
        LotteryError::Unauthorized
    );
    match lottery.status {
        LotteryStatus::VrfVerified | LotteryStatus::Completed => {
            return err!(LotteryError::AlreadyVerified)
        }
        LotteryStatus::AwaitingVrf => {}
        LotteryStatus::Open | LotteryStatus::DrawScheduled => {
            return Err(lottery.invalid_transition(LotteryStatus::VrfVerified))
        }
    }

    if !verifier.verify(proof, &value) {
        msg!(
            "Randomness proof rejected for request {}",
            lottery.vrf_request_nonce
        );
        return err!(LotteryError::VrfVerificationFailed);
    }

    lottery.accept_randomness(value)
}

/// Verifies proofs against the Ed25519 precompile instruction that precedes
/// the current one in the transaction.
pub struct Ed25519Verifier<'a, 'info> {
    instructions: &'a AccountInfo<'info>,
    oracle: Pubkey,
    lottery: Pubkey,
    nonce: u64,
}

impl<'a, 'info> Ed25519Verifier<'a, 'info> {
    pub fn new(instructions: &'a AccountInfo<'info>, lottery_key: Pubkey, lottery: &Lottery) -> Self {
        Self {
            instructions,
            oracle: lottery.vrf_oracle,
            lottery: lottery_key,
            nonce: lottery.vrf_request_nonce,
        }
    }
}

impl RandomnessVerifier for Ed25519Verifier<'_, '_> {
    fn verify(&self, proof: &[u8; 64], value: &[u8; 32]) -> bool {
        let Ok(current) = load_current_index_checked(self.instructions) else {
            return false;
        };
        let Some(previous) = current.checked_sub(1) else {
            msg!("No signature instruction precedes the submission");
            return false;
        };
        let Ok(instruction) = load_instruction_at_checked(previous as usize, self.instructions)
        else {
            return false;
        };
        if instruction.program_id != ed25519_program::ID {
            msg!("Preceding instruction is not an Ed25519 verification");
            return false;
        }

        proof_attests(
            &instruction.data,
            &self.oracle,
            &self.lottery,
            self.nonce,
            proof,
            value,
        )
    }
}

/// Returns true when `data` is an Ed25519 precompile payload carrying exactly
/// one signature, with key, message and signature all embedded in the
/// instruction and equal to the expected ones.
pub fn ed25519_instruction_matches(
    data: &[u8],
    oracle: &Pubkey,
    message: &[u8],
    signature: &[u8; 64],
) -> bool {
    if data.len() < SIGNATURE_OFFSETS_START + SIGNATURE_OFFSETS_SERIALIZED_SIZE || data[0] != 1 {
        return false;
    }

    let offsets = array_ref![data, SIGNATURE_OFFSETS_START, SIGNATURE_OFFSETS_SERIALIZED_SIZE];
    let field = |i: usize| u16::from_le_bytes(*array_ref![offsets, i * 2, 2]);

    let signature_offset = field(0) as usize;
    let signature_instruction = field(1);
    let pubkey_offset = field(2) as usize;
    let pubkey_instruction = field(3);
    let message_offset = field(4) as usize;
    let message_size = field(5) as usize;
    let message_instruction = field(6);

    // Data referenced from other instructions is not covered by this check
    if [signature_instruction, pubkey_instruction, message_instruction]
        .iter()
        .any(|&index| index != CURRENT_INSTRUCTION)
    {
        return false;
    }

    let slice = |offset: usize, len: usize| {
        offset
            .checked_add(len)
            .and_then(|end| data.get(offset..end))
    };

    match (
        slice(pubkey_offset, PUBKEY_SERIALIZED_SIZE),
        slice(signature_offset, SIGNATURE_SERIALIZED_SIZE),
        slice(message_offset, message_size),
    ) {
        (Some(pubkey), Some(signed), Some(signed_message)) => {
            pubkey == oracle.as_ref() && signed == signature.as_ref() && signed_message == message
        }
        _ => false,
    }
}
