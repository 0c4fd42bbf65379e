use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::{state::*, errors::*, constants::*, events::*};

// Init Charity Instruction
//
// A validator proposes a charity. It starts Pending with a fresh id.
//
// Security checks:
// 1. Caller is a validator
// 2. Name and info within bounds
// 3. Name never used before in this governance (CharityName claim)
// 4. A walleted charity names a real wallet

#[derive(Accounts)]
#[instruction(wallet: Pubkey, name: String)]
pub struct InitCharity<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [GOVERNANCE, governance.authority.as_ref()],
        bump = governance.bump,
    )]
    pub governance: Account<'info, Governance>,

    // Charity PDA
    // Seeds: ["charity", governance, next charity id]
    #[account(
        init,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + Charity::INIT_SPACE,
        seeds = [
            CHARITY,
            governance.key().as_ref(),
            &governance.next_charity_id().to_le_bytes(),
        ],
        bump,
    )]
    pub charity: Account<'info, Charity>,

    // Name claim PDA
    // Seeds: ["charity_name", governance, sha256(name)]
    // init_if_needed so a taken name reports DuplicateName
    #[account(
        init_if_needed,
        payer = proposer,
        space = ANCHOR_DISCRIMINATOR + CharityName::INIT_SPACE,
        seeds = [
            CHARITY_NAME,
            governance.key().as_ref(),
            hash(name.as_bytes()).as_ref(),
        ],
        bump,
    )]
    pub charity_name: Account<'info, CharityName>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitCharity<'info> {
    pub fn init_charity(
        &mut self,
        wallet: Pubkey,
        name: String,
        has_wallet: bool,
        info: String,
        bumps: &InitCharityBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Caller Is Validator
        self.governance.assert_is_validator(&self.proposer.key())?;

        // 2. Bounds
        require!(
            name.len() <= MAX_CHARITY_NAME_LEN,
            GovernanceError::NameTooLong
        );
        require!(
            info.len() <= MAX_CHARITY_INFO_LEN,
            GovernanceError::InfoTooLong
        );

        // 3. Name Uniqueness
        require!(!self.charity_name.claimed, GovernanceError::DuplicateName);

        // 4. Wallet Presence
        if has_wallet {
            require!(wallet != Pubkey::default(), GovernanceError::MissingWallet);
        }

        let charity_id = self.governance.assign_charity_id()?;
        let now = Clock::get()?.unix_timestamp;

        self.charity_name.set_inner(CharityName {
            governance: self.governance.key(),
            charity_id,
            claimed: true,
            bump: bumps.charity_name,
        });

        self.charity.set_inner(Charity {
            governance: self.governance.key(),
            charity_id,
            wallet,
            name: name.clone(),
            has_wallet,
            info: info.clone(),
            status: CharityStatus::Pending,
            proposer: self.proposer.key(),
            approve_votes: 0,
            disapprove_votes: 0,
            created_at: now,
            resolved_at: 0,
            bump: bumps.charity,
        });

        emit!(CharityCreated {
            charity_id,
            wallet,
            name,
            has_wallet,
            info,
        });

        Ok(())
    }
}
