use anchor_lang::error_code;

#[error_code]
pub enum LotteryError {
    #[msg("Signer is not authorized for this operation")]
    Unauthorized,
    #[msg("Lottery cannot move from its current status to the requested one")]
    InvalidStateTransition,
    #[msg("No tickets have been sold")]
    NoParticipants,
    #[msg("Buyer cannot cover the ticket price")]
    InsufficientFunds,
    #[msg("Treasury balance is too low for this amount")]
    InsufficientBalance,
    #[msg("A withdrawal is already pending")]
    WithdrawalAlreadyPending,
    #[msg("There is no pending withdrawal")]
    NoPendingWithdrawal,
    #[msg("Withdrawal timelock has not elapsed")]
    TimelockNotElapsed,
    #[msg("The named additional signer did not co-sign")]
    MissingCosigner,
    #[msg("Randomness proof failed verification")]
    VrfVerificationFailed,
    #[msg("Randomness has already been verified for this lottery")]
    AlreadyVerified,
    #[msg("Lottery is not open for ticket sales")]
    LotteryNotOpen,
    Overflow,
    #[msg("Ticket price is outside the allowed range")]
    InvalidTicketPrice,
    #[msg("Protocol fee exceeds the maximum allowed")]
    InvalidFee,
    #[msg("Treasury does not belong to this lottery")]
    InvalidTreasury,
    #[msg("Ticket is not the winning ticket of this lottery")]
    InvalidWinningTicket,
    #[msg("Winner account does not own the winning ticket")]
    InvalidWinner,
    #[msg("Destination does not match the pending withdrawal")]
    InvalidDestination,
    #[msg("Additional signer must differ from the treasury authority")]
    InvalidCosigner,
    #[msg("Withdrawal amount must be greater than zero")]
    InvalidWithdrawalAmount,
    #[msg("Invalid Instructions sysvar account provided")]
    InvalidInstructionsSysvar,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    #[msg("Previous randomness request has not timed out")]
    VrfRequestPending,
}
