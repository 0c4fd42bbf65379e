use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;
use crate::constants::*;

// Why a resolution ended in Disapproved
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisapprovalReason {
    // Fewer than 66% of validators voted (includes no votes at all)
    InsufficientTurnout,
    // Turnout met, fewer than 75% of the votes cast approve
    InsufficientApproval,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuorumOutcome {
    Approved,
    Disapproved(DisapprovalReason),
}

// Quorum law over exact integers, thresholds inclusive:
//   votes_cast * 100 >= total_validators * 66
//   approve * 100 >= votes_cast * 75
// Turnout is checked first.
pub fn evaluate_quorum(approve_votes: u64, disapprove_votes: u64, total_validators: u64) -> QuorumOutcome {
    let approve = approve_votes as u128;
    let votes_cast = approve + disapprove_votes as u128;
    let total = total_validators as u128;

    if votes_cast == 0 || votes_cast * 100 < total * TURNOUT_THRESHOLD_PERCENT as u128 {
        return QuorumOutcome::Disapproved(DisapprovalReason::InsufficientTurnout);
    }

    if approve * 100 < votes_cast * APPROVAL_THRESHOLD_PERCENT as u128 {
        return QuorumOutcome::Disapproved(DisapprovalReason::InsufficientApproval);
    }

    QuorumOutcome::Approved
}
