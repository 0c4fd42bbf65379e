use anchor_lang::prelude::*;
use charity_registry::{
    cpi::{accounts::AdmitCharity, admit_charity},
    program::CharityRegistry,
};
use crate::{state::*, errors::*, constants::*, events::*};

// Resolve Charity Instruction
//
// Any validator can close the vote on a pending charity.
// Approved charities are admitted into the registry by CPI,
// signed by the governance PDA (the registry's voting authority).
//
// Security checks:
// 1. Caller is a validator
// 2. Charity belongs to this governance and is Pending
// 3. Charity has a wallet (before any quorum math)
// 4. On approval: registry is set and matches the one passed in
//
// Admission is the last effect; if it fails the whole resolution reverts.

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct ResolveCharity<'info> {
    // Pays rent for the registry entry on approval
    #[account(mut)]
    pub validator: Signer<'info>,

    #[account(
        seeds = [GOVERNANCE, governance.authority.as_ref()],
        bump = governance.bump,
    )]
    pub governance: Account<'info, Governance>,

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

    /// CHECK: must equal governance.registry; owned and validated by the registry program
    #[account(mut)]
    pub registry_config: UncheckedAccount<'info>,

    /// CHECK: entry PDA created by the registry program during admission
    #[account(mut)]
    pub charity_entry: UncheckedAccount<'info>,

    /// CHECK: vault PDA funded by the registry program during admission
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    pub registry_program: Program<'info, CharityRegistry>,
    pub system_program: Program<'info, System>,
}

impl<'info> ResolveCharity<'info> {
    pub fn resolve_charity(&mut self, charity_id: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Caller Is Validator
        self.governance.assert_is_validator(&self.validator.key())?;

        // 2-3. Pending and wallet checks happen inside resolve
        let now = Clock::get()?.unix_timestamp;
        let total_validators = self.governance.total_validators();
        let outcome = self.charity.resolve(total_validators, now)?;

        let wallet = self.charity.wallet;
        let name = self.charity.name.clone();

        match outcome {
            QuorumOutcome::Disapproved(reason) => {
                emit!(CharityDisapproved {
                    charity_id,
                    wallet,
                    name,
                    reason,
                });
                msg!("Charity {} disapproved: {:?}", charity_id, reason);
            }
            QuorumOutcome::Approved => {
                emit!(CharityApproved {
                    charity_id,
                    wallet,
                    name: name.clone(),
                });
                msg!("Charity {} approved", charity_id);

                self.admit_to_registry(charity_id, name, wallet)?;
            }
        }

        Ok(())
    }

    fn admit_to_registry(&self, charity_id: u64, name: String, wallet: Pubkey) -> Result<()> {
        // 4. Registry Wiring Check
        require!(
            self.governance.registry != Pubkey::default(),
            GovernanceError::RegistryNotSet
        );
        require_keys_eq!(
            self.registry_config.key(),
            self.governance.registry,
            GovernanceError::InvalidRegistry
        );

        let authority = self.governance.authority;
        let governance_seeds = &[
            GOVERNANCE,
            authority.as_ref(),
            &[self.governance.bump],
        ];
        let signer_seeds = &[&governance_seeds[..]];

        admit_charity(
            CpiContext::new_with_signer(
                self.registry_program.to_account_info(),
                AdmitCharity {
                    voting_authority: self.governance.to_account_info(),
                    payer: self.validator.to_account_info(),
                    registry_config: self.registry_config.to_account_info(),
                    charity_entry: self.charity_entry.to_account_info(),
                    vault: self.vault.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                },
                signer_seeds,
            ),
            charity_id,
            name,
            wallet,
        )
    }
}
