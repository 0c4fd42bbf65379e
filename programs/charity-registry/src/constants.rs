pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["registry", admin]
pub const REGISTRY: &[u8] = b"registry";

// Seeds for PDA derivation: ["charity_entry", registry_config, charity_id]
pub const CHARITY_ENTRY: &[u8] = b"charity_entry";

// Seeds for PDA derivation: ["vault", charity_entry]
// System-owned account holding native donations and signing token payouts
pub const VAULT: &[u8] = b"vault";

// Seeds for PDA derivation: ["token_pool", charity_entry, mint]
pub const TOKEN_POOL: &[u8] = b"token_pool";

// Upper bound on stored charity names (bytes)
// The governance program enforces the same bound at creation
pub const MAX_CHARITY_NAME_LEN: usize = 64;

// Maximum number of SPL mints accepted for token donations
pub const MAX_WHITELISTED_ASSETS: usize = 16;
