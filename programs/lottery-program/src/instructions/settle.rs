use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Lottery, Settlement, Ticket, Treasury, TREASURY_SEED},
};

/// Event emitted when a lottery is completed and the prize paid out
#[event]
pub struct LotterySettled {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub winning_index: u64,
    /// Total paid in for the round
    pub pot: u64,
    /// Amount transferred to the winner
    pub prize: u64,
    /// Protocol fee kept in the treasury
    pub fee: u64,
}

/// Completes a lottery whose randomness has been verified and pays the
/// winner the pot minus the protocol fee.
///
/// Anyone may call this. A repeated call on a completed lottery returns the
/// recorded winner without moving any lamports.
///
/// # Account Validations
/// * Treasury - Must match the lottery's treasury and use proper PDA seeds
/// * Winning ticket - Must belong to this lottery; its index is checked
///   against the drawn index in the handler
/// * Winner - Must be the owner of the winning ticket
pub fn settle(ctx: Context<Settle>) -> Result<Pubkey> {
    let lottery_key = ctx.accounts.lottery.key();
    let now = Clock::get()?.unix_timestamp;

    let settlement = ctx.accounts.lottery.settle(
        &lottery_key,
        &mut ctx.accounts.treasury,
        &ctx.accounts.winning_ticket,
        now,
    )?;

    match settlement {
        Settlement::AlreadySettled { winner } => {
            msg!("Lottery already settled, winner {}", winner);
        }
        Settlement::Paid {
            winner,
            pot,
            prize,
            fee,
        } => {
            // Direct lamport moves work because the treasury is owned by this program
            ctx.accounts.treasury.to_account_info().sub_lamports(prize)?;
            ctx.accounts.winner.to_account_info().add_lamports(prize)?;

            emit!(LotterySettled {
                lottery: lottery_key,
                winner,
                winning_index: ctx.accounts.winning_ticket.index,
                pot,
                prize,
                fee,
            });
        }
    }

    Ok(settlement.winner())
}

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

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

    #[account(
        constraint = winning_ticket.lottery == lottery.key() @ LotteryError::InvalidWinningTicket,
    )]
    pub winning_ticket: Account<'info, Ticket>,

    #[account(
        mut,
        constraint = winner.key() == winning_ticket.owner @ LotteryError::InvalidWinner,
    )]
    pub winner: SystemAccount<'info>,
}
