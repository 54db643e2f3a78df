use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator + 32 admin + 2 fee_bps + 8 lottery_counter + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 2 + 8 + 1;

/// Upper bound on the protocol fee, in basis points (10%).
pub const MAX_FEE_BPS: u16 = 1_000;

#[account]
pub struct Config {
    pub admin: Pubkey,
    /// Protocol fee taken from each prize pool, in basis points.
    pub fee_bps: u16,
    /// Seeds the next lottery PDA; incremented on every creation.
    pub lottery_counter: u64,
    pub bump: u8,
}

impl Config {
    /// Changes the fee applied to lotteries created from now on. Running
    /// lotteries keep the fee their treasury was created with.
    pub fn set_fee(&mut self, signers: &[Pubkey], fee_bps: u16) -> Result<u16> {
        require!(signers.contains(&self.admin), LotteryError::Unauthorized);
        require!(fee_bps <= MAX_FEE_BPS, LotteryError::InvalidFee);

        let previous = self.fee_bps;
        self.fee_bps = fee_bps;
        Ok(previous)
    }
}
