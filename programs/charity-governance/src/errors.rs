use anchor_lang::prelude::*;

#[error_code]
pub enum GovernanceError {
    // Validator set errors
    #[msg("Only validators can perform this action")]
    Unauthorized,

    #[msg("Validator already exists")]
    AlreadyExists,

    #[msg("Maximum number of validators reached")]
    MaxValidatorsReached,

    // Charity errors
    #[msg("A charity with this name already exists")]
    DuplicateName,

    #[msg("Charity name exceeds the maximum length")]
    NameTooLong,

    #[msg("Charity info exceeds the maximum length")]
    InfoTooLong,

    #[msg("Charity has no wallet and cannot be approved")]
    MissingWallet,

    #[msg("Charity does not belong to this governance")]
    CharityNotFound,

    #[msg("Charity is not pending")]
    NotPending,

    // Voting errors
    #[msg("Validator has already voted on this charity")]
    AlreadyVoted,

    // Registry wiring errors
    #[msg("Charity registry has not been set")]
    RegistryNotSet,

    #[msg("Registry does not match or does not accept this governance")]
    InvalidRegistry,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
