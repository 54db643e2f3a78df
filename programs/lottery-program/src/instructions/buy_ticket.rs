use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{
        Lottery, LotteryStatus, Ticket, Treasury, TICKET_ACCOUNT_SIZE, TICKET_SEED, TREASURY_SEED,
    },
};

/// Event emitted when a ticket is purchased
#[event]
pub struct TicketPurchased {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Index assigned to the ticket
    pub index: u64,
    /// Amount paid in lamports
    pub payment_amount: u64,
}

/// Instruction to purchase one ticket for a lottery
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the lottery is in Open state through account constraints
/// 2. Verifies the treasury account matches the one stored in the lottery
/// 3. Ensures the buyer has sufficient funds for the ticket price
/// 4. Derives the ticket PDA from the current ticket count, so a concurrent
///    purchase that already took this index makes account creation fail
///
/// # Implementation Notes
/// - Uses checked arithmetic operations to prevent overflow
/// - Updates state before performing external calls
/// - The ticket record, the counter and the payment land in one transaction
pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<u64> {
    let ticket_price = ctx.accounts.lottery.ticket_price;

    require!(
        ctx.accounts.buyer.lamports() >= ticket_price,
        LotteryError::InsufficientFunds
    );

    let index = ctx
        .accounts
        .lottery
        .sell_ticket(&mut ctx.accounts.treasury)?;

    let ticket = &mut ctx.accounts.ticket;
    ticket.lottery = ctx.accounts.lottery.key();
    ticket.owner = ctx.accounts.buyer.key();
    ticket.index = index;
    ticket.purchased_at = Clock::get()?.unix_timestamp;
    ticket.bump = ctx.bumps.ticket;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &ctx.accounts.buyer.key(),
            &ctx.accounts.treasury.key(),
            ticket_price,
        ),
        &[
            ctx.accounts.buyer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )
    .map_err(|_| LotteryError::InsufficientFunds)?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(ticket_price)
                .ok_or(LotteryError::Overflow)?,
        LotteryError::TransferFailed
    );

    emit!(TicketPurchased {
        lottery: ctx.accounts.lottery.key(),
        buyer: ctx.accounts.buyer.key(),
        index,
        payment_amount: ticket_price,
    });

    Ok(index)
}

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(
        mut,
        constraint = lottery.status == LotteryStatus::Open @ LotteryError::LotteryNotOpen,
    )]
    pub lottery: Account<'info, Lottery>,

    /// PDA with seeds ["ticket", lottery_key, ticket_count]
    #[account(
        init,
        payer = buyer,
        space = TICKET_ACCOUNT_SIZE,
        seeds = [
            TICKET_SEED,
            lottery.key().as_ref(),
            lottery.ticket_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
        constraint = treasury.key() == lottery.treasury @ LotteryError::InvalidTreasury,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
