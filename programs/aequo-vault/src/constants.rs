/// PDA seeds
pub const VAULT_SEED: &[u8] = b"vault";
pub const ASSET_TREASURY_SEED: &[u8] = b"asset_treasury";
pub const A_TOKEN_TREASURY_SEED: &[u8] = b"a_token_treasury";
pub const USER_POSITION_SEED: &[u8] = b"user_position";
pub const ASSOCIATION_SEED: &[u8] = b"association";

/// Fee constants
pub const MAX_BPS: u16 = 10000;
/// Neither the owner nor a user may route more than half of the interest to associations
pub const MAX_FEES_BPS: u16 = 5000;
/// 20% of the interest goes to the association unless the user picks another share
pub const DEFAULT_FEES_BPS: u16 = 2000;

/// Fixed-point scale of `Vault::interest_index`
pub const INTEREST_INDEX_SCALE: u128 = 1_000_000_000_000;
