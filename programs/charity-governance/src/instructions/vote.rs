use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Vote Instruction
//
// A validator casts one approve or disapprove vote on a pending charity.
//
// Security checks:
// 1. Caller is a validator
// 2. Charity belongs to this governance and is Pending
// 3. Caller has not voted on this charity (VoteRecord per charity/validator)

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub validator: Signer<'info>,

    #[account(
        seeds = [GOVERNANCE, governance.authority.as_ref()],
        bump = governance.bump,
    )]
    pub governance: Account<'info, Governance>,

    // Unknown ids fail here with AccountNotInitialized
    #[account(
        mut,
        seeds = [
            CHARITY,
            governance.key().as_ref(),
            &charity_id.to_le_bytes(),
        ],
        bump = charity.bump,
        has_one = governance @ GovernanceError::CharityNotFound,
    )]
    pub charity: Account<'info, Charity>,

    // Vote record PDA
    // Seeds: ["vote_record", charity, validator]
    #[account(
        init_if_needed,
        payer = validator,
        space = ANCHOR_DISCRIMINATOR + VoteRecord::INIT_SPACE,
        seeds = [
            VOTE_RECORD,
            charity.key().as_ref(),
            validator.key().as_ref(),
        ],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self, charity_id: u64, approve: bool, bumps: &VoteBumps) -> Result<()> {
        let validator = self.validator.key();

        // SECURITY CHECKS

        // 1. Caller Is Validator
        self.governance.assert_is_validator(&validator)?;

        // 2. Pending Check
        self.charity.assert_pending()?;

        // 3. One Vote Per Validator
        require!(!self.vote_record.has_voted, GovernanceError::AlreadyVoted);

        self.charity.record_vote(approve)?;

        self.vote_record.set_inner(VoteRecord {
            charity_id,
            validator,
            choice: VoteChoice::from(approve),
            has_voted: true,
            voted_at: Clock::get()?.unix_timestamp,
            bump: bumps.vote_record,
        });

        if approve {
            emit!(ApproveVote {
                validator,
                charity_id,
            });
        } else {
            emit!(DisapproveVote {
                validator,
                charity_id,
            });
        }

        Ok(())
    }
}
