use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod vrf;


declare_id!("2JG8FU4VJRDoVDvVL7HWBi5YULngMYcwanazdyp6aWGw");

#[program]
pub mod lottery_program {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, fee_bps: u16) -> Result<()> {
        instructions::init_config::init_config(ctx, fee_bps)
    }

    pub fn update_fee(ctx: Context<UpdateFee>, fee_bps: u16) -> Result<()> {
        instructions::update_fee::update_fee(ctx, fee_bps)
    }

    pub fn create_lottery(
        ctx: Context<CreateLottery>,
        ticket_price: u64,
        vrf_oracle: Pubkey,
    ) -> Result<u64> {
        instructions::create_lottery::create_lottery(ctx, ticket_price, vrf_oracle)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<u64> {
        instructions::buy_ticket::buy_ticket(ctx)
    }

    pub fn schedule_draw(ctx: Context<ScheduleDraw>) -> Result<()> {
        instructions::schedule_draw::schedule_draw(ctx)
    }

    pub fn request_randomness(ctx: Context<RequestRandomness>) -> Result<u64> {
        instructions::request_randomness::request_randomness(ctx)
    }

    pub fn submit_vrf(ctx: Context<SubmitVrf>, proof: [u8; 64], value: [u8; 32]) -> Result<()> {
        instructions::submit_vrf::submit_vrf(ctx, proof, value)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<Pubkey> {
        instructions::settle::settle(ctx)
    }

    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        amount: u64,
        destination: Pubkey,
        additional_signer: Pubkey,
    ) -> Result<()> {
        instructions::request_withdrawal::request_withdrawal(
            ctx,
            amount,
            destination,
            additional_signer,
        )
    }

    pub fn execute_withdrawal(ctx: Context<ExecuteWithdrawal>) -> Result<()> {
        instructions::execute_withdrawal::execute_withdrawal(ctx)
    }

    pub fn cancel_withdrawal(ctx: Context<CancelWithdrawal>) -> Result<()> {
        instructions::cancel_withdrawal::cancel_withdrawal(ctx)
    }
}
