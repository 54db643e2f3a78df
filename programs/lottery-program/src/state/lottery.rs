use anchor_lang::prelude::*;
use arrayref::array_ref;

use crate::{
    error::LotteryError,
    state::{Ticket, Treasury},
};

// Space calculation:
// 8 (discriminator) +
// 8 (id) +
// 32 (authority) +
// 32 (treasury) +
// 8 (ticket_price) +
// 1 (status) +
// 8 (ticket_count) +
// 32 (vrf_oracle) +
// 8 (vrf_request_nonce) +
// 8 (vrf_requested_at) +
// 1 (vrf_verified) +
// 33 (randomness: Option<[u8; 32]>) +
// 9 (winning_index: Option<u64>) +
// 33 (winner: Option<Pubkey>) +
// 8 (prize_amount) +
// 8 (fee_amount) +
// 8 (created_at) +
// 8 (settled_at) +
// 1 (bump) =
// 254 total bytes
pub const LOTTERY_ACCOUNT_SIZE: usize =
    8 + 8 + 32 + 32 + 8 + 1 + 8 + 32 + 8 + 8 + 1 + 33 + 9 + 33 + 8 + 8 + 8 + 8 + 1;

pub const LOTTERY_SEED: &[u8] = b"lottery";

/// How long a randomness request stays exclusive before it may be replaced.
pub const VRF_TIMEOUT: i64 = 60 * 60;

const BPS_DENOMINATOR: u128 = 10_000;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LotteryStatus {
    Open = 0,
    DrawScheduled = 1,
    AwaitingVrf = 2,
    VrfVerified = 3,
    Completed = 4,
}

impl LotteryStatus {
    /// The only status this one may advance to.
    pub fn successor(self) -> Option<LotteryStatus> {
        match self {
            LotteryStatus::Open => Some(LotteryStatus::DrawScheduled),
            LotteryStatus::DrawScheduled => Some(LotteryStatus::AwaitingVrf),
            LotteryStatus::AwaitingVrf => Some(LotteryStatus::VrfVerified),
            LotteryStatus::VrfVerified => Some(LotteryStatus::Completed),
            LotteryStatus::Completed => None,
        }
    }
}

#[account]
pub struct Lottery {
    pub id: u64,
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub ticket_price: u64,
    pub status: LotteryStatus,
    pub ticket_count: u64,
    /// Ed25519 key of the oracle whose signature proves a random value.
    pub vrf_oracle: Pubkey,
    /// Bumped by every randomness request; proofs are bound to it.
    pub vrf_request_nonce: u64,
    pub vrf_requested_at: i64,
    pub vrf_verified: bool,
    pub randomness: Option<[u8; 32]>,
    pub winning_index: Option<u64>,
    pub winner: Option<Pubkey>,
    pub prize_amount: u64,
    pub fee_amount: u64,
    pub created_at: i64,
    pub settled_at: i64,
    pub bump: u8,
}

/// Outcome of a settlement call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// This call completed the lottery; `prize` lamports are owed to `winner`.
    Paid {
        winner: Pubkey,
        pot: u64,
        prize: u64,
        fee: u64,
    },
    /// The lottery was completed by an earlier call. Nothing moves.
    AlreadySettled { winner: Pubkey },
}

impl Settlement {
    pub fn winner(&self) -> Pubkey {
        match self {
            Settlement::Paid { winner, .. } | Settlement::AlreadySettled { winner } => *winner,
        }
    }
}

impl Lottery {
    pub(crate) fn invalid_transition(&self, requested: LotteryStatus) -> anchor_lang::error::Error {
        msg!(
            "Invalid status transition: {:?} -> {:?}",
            self.status,
            requested
        );
        error!(LotteryError::InvalidStateTransition)
    }

    fn transition(&mut self, requested: LotteryStatus) -> Result<()> {
        if self.status.successor() != Some(requested) {
            return Err(self.invalid_transition(requested));
        }
        self.status = requested;
        Ok(())
    }

    /// Total lamports paid in for this round.
    pub fn pot(&self) -> Result<u64> {
        Ok(self
            .ticket_count
            .checked_mul(self.ticket_price)
            .ok_or(LotteryError::Overflow)?)
    }

    /// Assigns the next ticket index and credits the price to the treasury.
    pub fn sell_ticket(&mut self, treasury: &mut Treasury) -> Result<u64> {
        require!(
            self.status == LotteryStatus::Open,
            LotteryError::LotteryNotOpen
        );

        let index = self.ticket_count;
        self.ticket_count = index.checked_add(1).ok_or(LotteryError::Overflow)?;
        treasury.deposit(self.ticket_price)?;

        Ok(index)
    }

    pub fn schedule_draw(&mut self, signers: &[Pubkey]) -> Result<()> {
        require!(signers.contains(&self.authority), LotteryError::Unauthorized);
        if self.status == LotteryStatus::Open {
            require!(self.ticket_count > 0, LotteryError::NoParticipants);
        }
        self.transition(LotteryStatus::DrawScheduled)
    }

    /// Opens a randomness request and returns its nonce.
    ///
    /// While awaiting randomness the request can only be replaced once
    /// [`VRF_TIMEOUT`] has passed, so an unanswered oracle can be retried but
    /// a delivered value cannot be discarded for a fresh one.
    pub fn request_randomness(&mut self, signers: &[Pubkey], now: i64) -> Result<u64> {
        require!(signers.contains(&self.authority), LotteryError::Unauthorized);
        match self.status {
            LotteryStatus::DrawScheduled => self.transition(LotteryStatus::AwaitingVrf)?,
            LotteryStatus::AwaitingVrf => {
                let retry_at = self
                    .vrf_requested_at
                    .checked_add(VRF_TIMEOUT)
                    .ok_or(LotteryError::Overflow)?;
                require!(now >= retry_at, LotteryError::VrfRequestPending);
            }
            _ => return Err(self.invalid_transition(LotteryStatus::AwaitingVrf)),
        }

        self.vrf_request_nonce = self
            .vrf_request_nonce
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;
        self.vrf_requested_at = now;

        Ok(self.vrf_request_nonce)
    }

    /// Records a verified random value and the winning index derived from it.
    /// Only the VRF gate calls this, after the proof has been checked.
    pub(crate) fn accept_randomness(&mut self, value: [u8; 32]) -> Result<u64> {
        let winning_index = draw_index(&value, self.ticket_count)?;
        self.transition(LotteryStatus::VrfVerified)?;

        self.vrf_verified = true;
        self.randomness = Some(value);
        self.winning_index = Some(winning_index);

        Ok(winning_index)
    }

    /// Completes the lottery and books the payout against the treasury.
    ///
    /// Calling this on a completed lottery returns the recorded winner and
    /// leaves both accounts untouched.
    pub fn settle(
        &mut self,
        lottery_key: &Pubkey,
        treasury: &mut Treasury,
        ticket: &Ticket,
        now: i64,
    ) -> Result<Settlement> {
        if self.status == LotteryStatus::Completed {
            let winner = self.winner.ok_or(LotteryError::InvalidWinner)?;
            return Ok(Settlement::AlreadySettled { winner });
        }
        if self.status != LotteryStatus::VrfVerified {
            return Err(self.invalid_transition(LotteryStatus::Completed));
        }

        let winning_index = self
            .winning_index
            .ok_or(LotteryError::InvalidWinningTicket)?;
        require_keys_eq!(
            ticket.lottery,
            *lottery_key,
            LotteryError::InvalidWinningTicket
        );
        require!(
            ticket.index == winning_index,
            LotteryError::InvalidWinningTicket
        );

        let pot = self.pot()?;
        let fee = u64::try_from(
            (pot as u128)
                .checked_mul(treasury.fee_bps as u128)
                .ok_or(LotteryError::Overflow)?
                / BPS_DENOMINATOR,
        )
        .map_err(|_| LotteryError::Overflow)?;
        let prize = pot.checked_sub(fee).ok_or(LotteryError::Overflow)?;

        treasury.release_prize(pot, prize)?;
        self.transition(LotteryStatus::Completed)?;

        self.winner = Some(ticket.owner);
        self.prize_amount = prize;
        self.fee_amount = fee;
        self.settled_at = now;

        Ok(Settlement::Paid {
            winner: ticket.owner,
            pot,
            prize,
            fee,
        })
    }
}

/// Maps a random value onto a ticket index: the first eight bytes read as a
/// little-endian integer, modulo the number of tickets.
pub fn draw_index(value: &[u8; 32], ticket_count: u64) -> Result<u64> {
    let random = u64::from_le_bytes(*array_ref![value, 0, 8]);
    Ok(random
        .checked_rem(ticket_count)
        .ok_or(LotteryError::NoParticipants)?)
}
