use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // Authorization errors
    #[msg("Only the registry admin can perform this action")]
    Unauthorized,

    #[msg("Only the configured voting authority can admit charities")]
    NotVotingAuthority,

    // Entry errors
    #[msg("Charity entry does not belong to this registry")]
    CharityNotFound,

    #[msg("Charity has been removed from the registry")]
    CharityRemoved,

    #[msg("Charity name exceeds the maximum length")]
    NameTooLong,

    #[msg("Charity has no payout wallet")]
    MissingWallet,

    // Donation errors
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Donation would exceed the charity's donation limit")]
    LimitExceeded,

    #[msg("Asset is not whitelisted for donations")]
    AssetNotWhitelisted,

    #[msg("Asset is already whitelisted")]
    AssetAlreadyWhitelisted,

    #[msg("Maximum number of whitelisted assets reached")]
    WhitelistFull,

    // Flow control errors
    #[msg("Emergency stop is enabled - all fund movement is halted")]
    EmergencyStopped,

    #[msg("Donation release is paused for this charity")]
    DonationReleasePaused,

    // Release errors
    #[msg("Release amount exceeds the donation pool")]
    InsufficientPool,

    #[msg("Recipient does not match the charity wallet")]
    InvalidRecipient,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,

    // Limit errors
    #[msg("Donation limit is below a current donation pool")]
    LimitBelowPool,

    #[msg("Token pools passed do not match the charity's token pools")]
    TokenPoolMismatch,
}
