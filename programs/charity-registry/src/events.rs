use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub admin: Pubkey,
    pub voting_authority: Pubkey,
}

#[event]
pub struct CharityAdded {
    pub charity_id: u64,
    pub name: String,
    pub wallet: Pubkey,
}

#[event]
pub struct DonationMade {
    pub charity_id: u64,
    pub donor: Pubkey,
    pub amount: u64,
    pub donation_pool: u64,
}

#[event]
pub struct TokenDonationMade {
    pub charity_id: u64,
    pub donor: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub donation_pool: u64,
}

#[event]
pub struct DonationReleased {
    pub charity_id: u64,
    pub wallet: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokenDonationReleased {
    pub charity_id: u64,
    pub wallet: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
