use anchor_lang::prelude::*;

// Validator entry in the governance validator set
// Membership only: every validator carries equal weight
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, InitSpace)]
pub struct Validator {
    pub pubkey: Pubkey,
    pub added_at: i64,
}
