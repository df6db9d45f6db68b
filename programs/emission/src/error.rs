use anchor_lang::prelude::*;

/// Hard-failure reasons. Any of these aborts the whole operation.
#[error_code]
pub enum EmissionError {
    #[msg("Unauthorized: caller is not permitted")]
    Unauthorized,

    #[msg("Invalid sender: caller must be a contract")]
    InvalidSender,

    #[msg("Invalid distribution schedule")]
    InvalidSchedule,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid certificate holder")]
    InvalidCertificateHolder,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Allocation window closed: tokens burned")]
    TokensBurned,

    #[msg("Certificate limit reached")]
    CertificateLimitReached,

    #[msg("Distribution not ready")]
    DistributionNotReady,

    #[msg("Failed distribution notification")]
    FailedDistributionNotification,

    #[msg("Invalid transfer to holder")]
    InvalidTransferTo,

    #[msg("Math overflow")]
    MathOverflow,
}
