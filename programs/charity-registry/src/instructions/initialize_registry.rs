use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Initialize Registry Instruction
//
// Creates the registry configuration for an admin.
// The voting authority is the only key allowed to admit charities;
// in practice it is the governance PDA that resolves charity votes.

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // Registry config PDA
    // Seeds: ["registry", admin]
    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + RegistryConfig::INIT_SPACE,
        seeds = [REGISTRY, admin.key().as_ref()],
        bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeRegistry<'info> {
    pub fn initialize_registry(
        &mut self,
        voting_authority: Pubkey,
        bumps: &InitializeRegistryBumps,
    ) -> Result<()> {
        self.registry_config.set_inner(RegistryConfig {
            admin: self.admin.key(),
            voting_authority,
            charity_count: 0,
            whitelisted_assets: [Pubkey::default(); MAX_WHITELISTED_ASSETS],
            whitelist_count: 0,
            bump: bumps.registry_config,
        });

        emit!(RegistryInitialized {
            registry: self.registry_config.key(),
            admin: self.admin.key(),
            voting_authority,
        });

        Ok(())
    }
}
