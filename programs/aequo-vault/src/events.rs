use anchor_lang::prelude::*;

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub asset_mint: Pubkey,
    pub a_token_mint: Pubkey,
    pub lending_program: Pubkey,
    pub default_fees_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub principal: u64,
    pub user_interest: u64,
    pub association_interest: u64,
}

#[event]
pub struct InterestClaimed {
    pub user: Pubkey,
    pub user_interest: u64,
    pub association: Pubkey,
    pub association_interest: u64,
}

#[event]
pub struct UserAssociationUpdated {
    pub user: Pubkey,
    pub association: Pubkey,
}

/// Folded by clients into the current whitelist; there is no on-chain list.
#[event]
pub struct AssociationWhitelistUpdated {
    pub association: Pubkey,
    pub whitelisted: bool,
}

#[event]
pub struct UserFeesPercentageUpdated {
    pub user: Pubkey,
    pub fees_bps: u16,
}

#[event]
pub struct FeesPercentageUpdated {
    pub old_fees_bps: u16,
    pub new_fees_bps: u16,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
