use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::VaultError;

/// Interest owed to a user, broken down by beneficiary.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterestSplit {
    pub total_interest: u64,
    pub user_share: u64,
    pub association_share: u64,
}

/// Split `total_interest` so that the association gets `fees_bps` of it, rounded down.
/// The user keeps the remainder, so the two shares always add up to the total.
pub fn split_interest(total_interest: u64, fees_bps: u16) -> Result<InterestSplit> {
    require!(fees_bps <= MAX_BPS, VaultError::MathOverflow);

    let association_share = (total_interest as u128)
        .checked_mul(fees_bps as u128)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(MAX_BPS as u128)
        .ok_or(VaultError::MathOverflow)? as u64;

    let user_share = total_interest
        .checked_sub(association_share)
        .ok_or(VaultError::MathOverflow)?;

    Ok(InterestSplit {
        total_interest,
        user_share,
        association_share,
    })
}

/// Index increment for `growth` aTokens spread over `total_assets` of principal.
pub fn index_delta(growth: u64, total_assets: u64) -> Result<u128> {
    if growth == 0 || total_assets == 0 {
        return Ok(0);
    }

    let delta = (growth as u128)
        .checked_mul(INTEREST_INDEX_SCALE)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(total_assets as u128)
        .ok_or(VaultError::MathOverflow)?;

    Ok(delta)
}

/// Interest earned by `principal` while the index moved from `checkpoint` to `index`.
pub fn accrued_since(principal: u64, checkpoint: u128, index: u128) -> Result<u64> {
    let moved = index
        .checked_sub(checkpoint)
        .ok_or(VaultError::MathOverflow)?;

    let earned = (principal as u128)
        .checked_mul(moved)
        .ok_or(VaultError::MathOverflow)?
        .checked_div(INTEREST_INDEX_SCALE)
        .ok_or(VaultError::MathOverflow)?;

    u64::try_from(earned).map_err(|_| VaultError::MathOverflow.into())
}
