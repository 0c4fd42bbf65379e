use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

// Donation pool entry for an admitted charity
//
// Created only by admit_charity, which the governance program invokes after a
// charity is approved. Name and wallet are a snapshot taken at admission; the
// registry never reads governance state afterwards.
#[account]
#[derive(InitSpace)]
pub struct CharityEntry {
    // Registry this entry belongs to
    pub registry: Pubkey,

    // Charity id assigned by governance
    pub charity_id: u64,

    #[max_len(MAX_CHARITY_NAME_LEN)]
    pub name: String,

    // Payout destination for released donations
    pub wallet: Pubkey,

    // Native donations held in the vault, in lamports
    // Vault balance = rent-exempt minimum + donation_pool
    pub donation_pool: u64,

    // Unix timestamp of the last payout (0 if never released)
    pub last_release_timestamp: i64,

    // Soft delete - a removed entry accepts no further donations
    pub is_removed: bool,

    // Optional cap on pool size (same rule applies to each token pool in its own units)
    pub is_donation_limit_enabled: bool,
    pub donation_limit: u64,

    // Number of token pools opened under this entry
    pub token_pool_count: u32,

    // Halts donations and releases
    pub is_emergency_stop_enabled: bool,

    // Halts releases only
    pub is_donation_release_paused: bool,

    pub admitted_at: i64,

    // PDA bump seed for the entry
    pub bump: u8,

    // PDA bump seed for the vault
    // Used for vault PDA signing on payouts
    pub vault_bump: u8,
}

impl CharityEntry {
    pub fn belongs_to(&self, registry: &Pubkey) -> bool {
        self.registry == *registry
    }

    // Donations require a live entry with no emergency stop
    pub fn assert_accepting_donations(&self) -> Result<()> {
        require!(!self.is_removed, RegistryError::CharityRemoved);
        require!(
            !self.is_emergency_stop_enabled,
            RegistryError::EmergencyStopped
        );
        Ok(())
    }

    // Releases require no emergency stop and no release pause
    // Removed entries can still pay out what they hold
    pub fn assert_releasable(&self) -> Result<()> {
        require!(
            !self.is_emergency_stop_enabled,
            RegistryError::EmergencyStopped
        );
        require!(
            !self.is_donation_release_paused,
            RegistryError::DonationReleasePaused
        );
        Ok(())
    }

    // Pool balance after crediting `amount`, enforcing the donation limit
    pub fn credited_pool(&self, pool: u64, amount: u64) -> Result<u64> {
        require!(amount > 0, RegistryError::ZeroAmount);

        let new_pool = pool.checked_add(amount).ok_or(RegistryError::Overflow)?;

        if self.is_donation_limit_enabled {
            require!(
                new_pool <= self.donation_limit,
                RegistryError::LimitExceeded
            );
        }

        Ok(new_pool)
    }

    // Pool balance after debiting `amount`
    pub fn debited_pool(pool: u64, amount: u64) -> Result<u64> {
        require!(amount > 0, RegistryError::ZeroAmount);
        require!(amount <= pool, RegistryError::InsufficientPool);
        pool.checked_sub(amount)
            .ok_or_else(|| error!(RegistryError::InsufficientPool))
    }

    pub fn record_donation(&mut self, amount: u64) -> Result<()> {
        self.assert_accepting_donations()?;
        self.donation_pool = self.credited_pool(self.donation_pool, amount)?;
        Ok(())
    }

    pub fn record_release(&mut self, amount: u64, now: i64) -> Result<()> {
        self.assert_releasable()?;
        self.donation_pool = Self::debited_pool(self.donation_pool, amount)?;
        self.last_release_timestamp = now;
        Ok(())
    }

    // `token_pools` holds the balance of every token pool under this entry
    // An enabled limit never sits below any pool
    pub fn limit_donations(&mut self, limit: u64, token_pools: &[u64]) -> Result<()> {
        require!(
            token_pools.len() == self.token_pool_count as usize,
            RegistryError::TokenPoolMismatch
        );
        require!(self.donation_pool <= limit, RegistryError::LimitBelowPool);
        require!(
            token_pools.iter().all(|pool| *pool <= limit),
            RegistryError::LimitBelowPool
        );

        self.is_donation_limit_enabled = true;
        self.donation_limit = limit;
        Ok(())
    }

    pub fn register_token_pool(&mut self) -> Result<()> {
        self.token_pool_count = self
            .token_pool_count
            .checked_add(1)
            .ok_or(RegistryError::Overflow)?;
        Ok(())
    }

    pub fn disable_donation_limit(&mut self) {
        self.is_donation_limit_enabled = false;
        self.donation_limit = 0;
    }

    pub fn remove(&mut self) -> Result<()> {
        require!(!self.is_removed, RegistryError::CharityRemoved);
        self.is_removed = true;
        Ok(())
    }
}

// Per-(charity, mint) accounting for SPL token donations
// Tokens sit in the vault's associated token account
#[account]
#[derive(InitSpace)]
pub struct TokenPool {
    pub charity_entry: Pubkey,
    pub mint: Pubkey,
    pub donation_pool: u64,
    pub last_release_timestamp: i64,
    pub bump: u8,
}

impl TokenPool {
    // A freshly created pool (init_if_needed) has a default mint
    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }

    pub fn record_donation(&mut self, entry: &CharityEntry, amount: u64) -> Result<()> {
        entry.assert_accepting_donations()?;
        self.donation_pool = entry.credited_pool(self.donation_pool, amount)?;
        Ok(())
    }

    pub fn record_release(&mut self, entry: &CharityEntry, amount: u64, now: i64) -> Result<()> {
        entry.assert_releasable()?;
        self.donation_pool = CharityEntry::debited_pool(self.donation_pool, amount)?;
        self.last_release_timestamp = now;
        Ok(())
    }
}
