use anchor_lang::prelude::*;

// 8 discriminator + 32 lottery + 32 owner + 8 index + 8 purchased_at + 1 bump
pub const TICKET_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1;

pub const TICKET_SEED: &[u8] = b"ticket";

/// One record per purchase. Written once by `buy_ticket` and never mutated.
///
/// The address is derived from the lottery and the ticket index, so two
/// purchases racing for the same index collide on account creation and only
/// one of them can land.
#[account]
pub struct Ticket {
    pub lottery: Pubkey,
    pub owner: Pubkey,
    pub index: u64,
    pub purchased_at: i64,
    pub bump: u8,
}

impl Ticket {
    /// Derives the registry address of ticket `index` in `lottery`.
    pub fn address(program_id: &Pubkey, lottery: &Pubkey, index: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[TICKET_SEED, lottery.as_ref(), index.to_le_bytes().as_ref()],
            program_id,
        )
    }
}
