pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["governance", authority]
// Also the signer the registry recognises as its voting authority
pub const GOVERNANCE: &[u8] = b"governance";

// Seeds for PDA derivation: ["charity", governance, charity_id]
pub const CHARITY: &[u8] = b"charity";

// Seeds for PDA derivation: ["vote_record", charity, validator]
pub const VOTE_RECORD: &[u8] = b"vote_record";

// Seeds for PDA derivation: ["charity_name", governance, sha256(name)]
// Names can exceed the 32-byte seed limit, so the hash is used
pub const CHARITY_NAME: &[u8] = b"charity_name";

// Maximum number of validators per governance instance
pub const MAX_VALIDATORS: usize = 32;

// Stored names must fit the registry entry they are copied into
pub use charity_registry::constants::MAX_CHARITY_NAME_LEN;

// Off-chain metadata content identifier (e.g. an IPFS CID)
pub const MAX_CHARITY_INFO_LEN: usize = 128;

// Quorum: turnout >= 66% of validators, approval >= 75% of votes cast
pub const TURNOUT_THRESHOLD_PERCENT: u64 = 66;
pub const APPROVAL_THRESHOLD_PERCENT: u64 = 75;
