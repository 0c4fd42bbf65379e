use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum VoteChoice {
    Approve,
    Disapprove,
}

impl From<bool> for VoteChoice {
    fn from(approve: bool) -> Self {
        if approve {
            VoteChoice::Approve
        } else {
            VoteChoice::Disapprove
        }
    }
}

// One per (charity, validator)
// Seeds: ["vote_record", charity, validator]
// Created with init_if_needed; has_voted marks a used record
#[account]
#[derive(InitSpace)]
pub struct VoteRecord {
    pub charity_id: u64,
    pub validator: Pubkey,
    pub choice: VoteChoice,
    pub has_voted: bool,
    pub voted_at: i64,
    pub bump: u8,
}
