use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Registry configuration account
// One per admin; several registries can coexist
#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    // Administrative authority (limits, pauses, whitelist, releases)
    pub admin: Pubkey,

    // Only signer allowed to admit charities
    // Set to the governance PDA that resolves charity votes
    pub voting_authority: Pubkey,

    // Number of charities admitted so far
    pub charity_count: u64,

    // SPL mints accepted for token donations
    // Fixed-size array avoids realloc; only the first whitelist_count slots are live
    pub whitelisted_assets: [Pubkey; MAX_WHITELISTED_ASSETS],
    pub whitelist_count: u8,

    pub bump: u8,
}

impl RegistryConfig {
    pub fn assert_is_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *caller, RegistryError::Unauthorized);
        Ok(())
    }

    pub fn assert_is_voting_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(
            self.voting_authority,
            *caller,
            RegistryError::NotVotingAuthority
        );
        Ok(())
    }

    pub fn is_whitelisted(&self, mint: &Pubkey) -> bool {
        self.whitelisted_assets
            .iter()
            .take(self.whitelist_count as usize)
            .any(|asset| asset == mint)
    }

    pub fn whitelist(&mut self, mint: Pubkey) -> Result<()> {
        require!(!self.is_whitelisted(&mint), RegistryError::AssetAlreadyWhitelisted);
        require!(
            (self.whitelist_count as usize) < MAX_WHITELISTED_ASSETS,
            RegistryError::WhitelistFull
        );

        self.whitelisted_assets[self.whitelist_count as usize] = mint;
        self.whitelist_count = self
            .whitelist_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(())
    }

    pub fn record_admission(&mut self) -> Result<()> {
        self.charity_count = self
            .charity_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(())
    }
}
