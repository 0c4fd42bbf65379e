use anchor_lang::prelude::*;
use charity_registry::RegistryConfig;
use crate::{state::*, errors::*, constants::*};

// Set Charity Registry Instruction
//
// Wires the registry that approved charities are admitted into.
//
// Security checks:
// 1. Caller is the governance authority
// 2. Registry config is owned by the registry program (Account type)
// 3. Registry names this governance PDA as its voting authority

#[derive(Accounts)]
pub struct SetCharityRegistry<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [GOVERNANCE, governance.authority.as_ref()],
        bump = governance.bump,
        has_one = authority @ GovernanceError::Unauthorized,
    )]
    pub governance: Account<'info, Governance>,

    pub registry_config: Account<'info, RegistryConfig>,
}

impl<'info> SetCharityRegistry<'info> {
    pub fn set_charity_registry(&mut self) -> Result<()> {
        // SECURITY CHECKS

        // 1. Voting Authority Check
        // Admissions signed by this governance must be accepted by the registry
        require_keys_eq!(
            self.registry_config.voting_authority,
            self.governance.key(),
            GovernanceError::InvalidRegistry
        );

        self.governance.registry = self.registry_config.key();

        msg!("Charity registry set to {}", self.registry_config.key());
        Ok(())
    }
}
