use anchor_lang::prelude::*;
use crate::state::DisapprovalReason;

#[event]
pub struct ValidatorAdded {
    pub validator: Pubkey,
    pub added_by: Pubkey,
}

#[event]
pub struct CharityCreated {
    pub charity_id: u64,
    pub wallet: Pubkey,
    pub name: String,
    pub has_wallet: bool,
    pub info: String,
}

#[event]
pub struct ApproveVote {
    pub validator: Pubkey,
    pub charity_id: u64,
}

#[event]
pub struct DisapproveVote {
    pub validator: Pubkey,
    pub charity_id: u64,
}

#[event]
pub struct CharityApproved {
    pub charity_id: u64,
    pub wallet: Pubkey,
    pub name: String,
}

#[event]
pub struct CharityDisapproved {
    pub charity_id: u64,
    pub wallet: Pubkey,
    pub name: String,
    pub reason: DisapprovalReason,
}
