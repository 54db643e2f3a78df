use anchor_lang::prelude::*;

use crate::error::LotteryError;

// Space calculation:
// 8 (discriminator) +
// 32 (lottery) +
// 32 (authority) +
// 8 (balance) +
// 8 (prize_reserve) +
// 2 (fee_bps) +
// 8 (total_fees_collected) +
// 89 (pending_withdrawal: Option<PendingWithdrawal>) +
// 8 (last_withdrawal) +
// 1 (bump) =
// 196 total bytes
pub const TREASURY_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + 8 + 8 + 2 + 8 + (1 + PENDING_WITHDRAWAL_SIZE) + 8 + 1;

// 8 amount + 32 destination + 32 additional_signer + 8 requested_at + 8 unlock_time
pub const PENDING_WITHDRAWAL_SIZE: usize = 8 + 32 + 32 + 8 + 8;

/// Delay between requesting and executing a withdrawal.
pub const TIMELOCK_DURATION: i64 = 24 * 60 * 60;

pub const TREASURY_SEED: &[u8] = b"treasury";

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWithdrawal {
    pub amount: u64,
    pub destination: Pubkey,
    pub additional_signer: Pubkey,
    pub requested_at: i64,
    pub unlock_time: i64,
}

/// Pooled funds of one lottery round.
///
/// `balance` tracks the lamports held on behalf of the round, excluding the
/// rent-exempt minimum of the account itself. `prize_reserve` is the part of
/// `balance` still owed to an unsettled draw and is never withdrawable.
#[account]
pub struct Treasury {
    pub lottery: Pubkey,
    pub authority: Pubkey,
    pub balance: u64,
    pub prize_reserve: u64,
    pub fee_bps: u16,
    pub total_fees_collected: u64,
    pub pending_withdrawal: Option<PendingWithdrawal>,
    /// Time of the last executed withdrawal, zero if none.
    pub last_withdrawal: i64,
    pub bump: u8,
}

impl Treasury {
    /// Funds the authority may queue for withdrawal.
    pub fn available(&self) -> u64 {
        self.balance.saturating_sub(self.prize_reserve)
    }

    /// Credits a ticket payment. Only the lottery state machine calls this.
    pub(crate) fn deposit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;
        self.prize_reserve = self
            .prize_reserve
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;
        Ok(())
    }

    /// Releases `pot` from the reserve and debits the `prize` paid to the
    /// winner. The difference stays in `balance` as protocol fee.
    pub(crate) fn release_prize(&mut self, pot: u64, prize: u64) -> Result<u64> {
        let fee = pot.checked_sub(prize).ok_or(LotteryError::Overflow)?;

        self.prize_reserve = self
            .prize_reserve
            .checked_sub(pot)
            .ok_or(LotteryError::InsufficientBalance)?;
        self.balance = self
            .balance
            .checked_sub(prize)
            .ok_or(LotteryError::InsufficientBalance)?;
        self.total_fees_collected = self
            .total_fees_collected
            .checked_add(fee)
            .ok_or(LotteryError::Overflow)?;

        Ok(fee)
    }

    /// Queues a withdrawal that unlocks after [`TIMELOCK_DURATION`].
    pub fn request_withdrawal(
        &mut self,
        signers: &[Pubkey],
        amount: u64,
        destination: Pubkey,
        additional_signer: Pubkey,
        now: i64,
    ) -> Result<PendingWithdrawal> {
        require!(signers.contains(&self.authority), LotteryError::Unauthorized);
        require!(
            self.pending_withdrawal.is_none(),
            LotteryError::WithdrawalAlreadyPending
        );
        require!(amount > 0, LotteryError::InvalidWithdrawalAmount);
        require_keys_neq!(
            additional_signer,
            self.authority,
            LotteryError::InvalidCosigner
        );
        require!(
            amount <= self.available(),
            LotteryError::InsufficientBalance
        );

        let pending = PendingWithdrawal {
            amount,
            destination,
            additional_signer,
            requested_at: now,
            unlock_time: now
                .checked_add(TIMELOCK_DURATION)
                .ok_or(LotteryError::Overflow)?,
        };
        self.pending_withdrawal = Some(pending);

        Ok(pending)
    }

    /// Debits the pending withdrawal and clears it. The caller moves the
    /// lamports in the same instruction.
    pub fn execute_withdrawal(
        &mut self,
        signers: &[Pubkey],
        destination: &Pubkey,
        now: i64,
    ) -> Result<PendingWithdrawal> {
        let pending = self
            .pending_withdrawal
            .ok_or(LotteryError::NoPendingWithdrawal)?;

        require!(signers.contains(&self.authority), LotteryError::Unauthorized);
        require!(
            now >= pending.unlock_time,
            LotteryError::TimelockNotElapsed
        );
        require!(
            signers.contains(&pending.additional_signer),
            LotteryError::MissingCosigner
        );
        require_keys_eq!(
            *destination,
            pending.destination,
            LotteryError::InvalidDestination
        );
        // Settlement may have run since the request was queued
        require!(
            pending.amount <= self.available(),
            LotteryError::InsufficientBalance
        );

        self.balance = self
            .balance
            .checked_sub(pending.amount)
            .ok_or(LotteryError::InsufficientBalance)?;
        self.pending_withdrawal = None;
        self.last_withdrawal = now;

        Ok(pending)
    }

    pub fn cancel_withdrawal(&mut self, signers: &[Pubkey]) -> Result<PendingWithdrawal> {
        require!(signers.contains(&self.authority), LotteryError::Unauthorized);

        self.pending_withdrawal
            .take()
            .ok_or_else(|| LotteryError::NoPendingWithdrawal.into())
    }
}
