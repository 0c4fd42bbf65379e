use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*};

// Charity Management Instructions
//
// Admin-only switches on a single entry:
// - limit_donation / disable_donation_limit
// - remove_charity (soft delete)
// - set_emergency_stop
// - set_donation_release_pause

#[derive(Accounts)]
#[instruction(charity_id: u64)]
pub struct ManageCharity<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY, registry_config.admin.as_ref()],
        bump = registry_config.bump,
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [
            CHARITY_ENTRY,
            registry_config.key().as_ref(),
            &charity_id.to_le_bytes(),
        ],
        bump = charity_entry.bump,
        constraint = charity_entry.belongs_to(&registry_config.key()) @ RegistryError::CharityNotFound,
    )]
    pub charity_entry: Account<'info, CharityEntry>,
}

impl<'info> ManageCharity<'info> {
    // `token_pools` must list every TokenPool of the entry, once each
    pub fn limit_donation(
        &mut self,
        charity_id: u64,
        limit: u64,
        token_pools: &[AccountInfo],
    ) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        let balances = self.token_pool_balances(token_pools)?;
        self.charity_entry.limit_donations(limit, &balances)?;

        msg!("Charity {} donation limit set to {}", charity_id, limit);
        Ok(())
    }

    fn token_pool_balances(&self, token_pools: &[AccountInfo]) -> Result<Vec<u64>> {
        let entry_key = self.charity_entry.key();
        let mut seen: Vec<Pubkey> = Vec::with_capacity(token_pools.len());
        let mut balances = Vec::with_capacity(token_pools.len());

        for info in token_pools {
            require_keys_eq!(*info.owner, crate::ID, RegistryError::TokenPoolMismatch);
            require!(!seen.contains(info.key), RegistryError::TokenPoolMismatch);

            let data = info.try_borrow_data()?;
            let pool = TokenPool::try_deserialize(&mut &data[..])?;
            require_keys_eq!(pool.charity_entry, entry_key, RegistryError::TokenPoolMismatch);

            seen.push(*info.key);
            balances.push(pool.donation_pool);
        }

        Ok(balances)
    }

    pub fn disable_donation_limit(&mut self, charity_id: u64) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        self.charity_entry.disable_donation_limit();

        msg!("Charity {} donation limit disabled", charity_id);
        Ok(())
    }

    pub fn remove_charity(&mut self, charity_id: u64) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        self.charity_entry.remove()?;

        msg!("Charity {} removed", charity_id);
        Ok(())
    }

    pub fn set_emergency_stop(&mut self, charity_id: u64, enabled: bool) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        self.charity_entry.is_emergency_stop_enabled = enabled;

        msg!("Charity {} emergency stop: {}", charity_id, enabled);
        Ok(())
    }

    pub fn set_donation_release_pause(&mut self, charity_id: u64, paused: bool) -> Result<()> {
        self.registry_config.assert_is_admin(&self.admin.key())?;

        self.charity_entry.is_donation_release_paused = paused;

        msg!("Charity {} donation release paused: {}", charity_id, paused);
        Ok(())
    }
}
