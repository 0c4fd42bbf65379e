use anchor_lang::prelude::*;

// Name claim, permanent once set
// Seeds: ["charity_name", governance, sha256(name)]
#[account]
#[derive(InitSpace)]
pub struct CharityName {
    pub governance: Pubkey,
    pub charity_id: u64,
    pub claimed: bool,
    pub bump: u8,
}
