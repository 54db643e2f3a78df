use crate::{
    error::LotteryError,
    state::{
        Config, Lottery, LotteryStatus, Treasury, LOTTERY_ACCOUNT_SIZE, LOTTERY_SEED,
        TREASURY_ACCOUNT_SIZE, TREASURY_SEED,
    },
};
use anchor_lang::prelude::*;

const MAX_TICKET_PRICE: u64 = 100_000_000_000; // 100 SOL

/// Event emitted when a lottery round is created
#[event]
pub struct LotteryCreated {
    /// The pubkey of the created lottery
    pub lottery: Pubkey,
    /// The treasury holding the round's funds
    pub treasury: Pubkey,
    /// Round number taken from the config counter
    pub id: u64,
    /// Price per ticket in lamports
    pub ticket_price: u64,
    /// Oracle key that signs randomness for this round
    pub vrf_oracle: Pubkey,
    pub created_at: i64,
}

/// Instruction to create a lottery round together with its treasury
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `ticket_price` - Price per ticket in lamports, fixed for the whole round
/// * `vrf_oracle` - Ed25519 key whose signatures are accepted as randomness proofs
///
/// # Account Validations
/// * Lottery - New PDA with seeds ["lottery", config.lottery_counter]
/// * Treasury - New PDA with seeds ["treasury", lottery_key]
/// * Authority - Becomes the lottery authority and the treasury authority
/// * Config - Supplies the round counter and the protocol fee
///
/// # Implementation Notes
/// - Initializes the lottery in Open state with no tickets
/// - The treasury copies the protocol fee so later config changes cannot
///   alter a running round
pub fn create_lottery(
    ctx: Context<CreateLottery>,
    ticket_price: u64,
    vrf_oracle: Pubkey,
) -> Result<u64> {
    require!(ticket_price > 0, LotteryError::InvalidTicketPrice);
    require!(
        ticket_price <= MAX_TICKET_PRICE,
        LotteryError::InvalidTicketPrice
    );

    let current_time = Clock::get()?.unix_timestamp;
    let id = ctx.accounts.config.lottery_counter;
    let authority = ctx.accounts.authority.key();

    let lottery = &mut ctx.accounts.lottery;
    lottery.id = id;
    lottery.authority = authority;
    lottery.treasury = ctx.accounts.treasury.key();
    lottery.ticket_price = ticket_price;
    lottery.status = LotteryStatus::Open;
    lottery.ticket_count = 0;
    lottery.vrf_oracle = vrf_oracle;
    lottery.vrf_request_nonce = 0;
    lottery.vrf_requested_at = 0;
    lottery.vrf_verified = false;
    lottery.randomness = None;
    lottery.winning_index = None;
    lottery.winner = None;
    lottery.prize_amount = 0;
    lottery.fee_amount = 0;
    lottery.created_at = current_time;
    lottery.settled_at = 0;
    lottery.bump = ctx.bumps.lottery;

    let treasury = &mut ctx.accounts.treasury;
    treasury.lottery = lottery.key();
    treasury.authority = authority;
    treasury.balance = 0;
    treasury.prize_reserve = 0;
    treasury.fee_bps = ctx.accounts.config.fee_bps;
    treasury.total_fees_collected = 0;
    treasury.pending_withdrawal = None;
    treasury.last_withdrawal = 0;
    treasury.bump = ctx.bumps.treasury;

    ctx.accounts.config.lottery_counter = id.checked_add(1).ok_or(LotteryError::Overflow)?;

    emit!(LotteryCreated {
        lottery: ctx.accounts.lottery.key(),
        treasury: ctx.accounts.treasury.key(),
        id,
        ticket_price,
        vrf_oracle,
        created_at: current_time,
    });

    Ok(id)
}

#[derive(Accounts)]
pub struct CreateLottery<'info> {
    #[account(
        init,
        payer = authority,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [
            LOTTERY_SEED,
            config.lottery_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
