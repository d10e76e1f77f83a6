use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::interest::{index_delta, InterestSplit};

#[account]
#[derive(Default)]
pub struct Vault {
    /// Administrator allowed to manage the whitelist and the default fee
    pub owner: Pubkey,

    /// Wallet that created the vault, part of the PDA seeds
    pub creator: Pubkey,

    /// Deposited asset (usually USDC)
    pub asset_mint: Pubkey,

    /// Interest-bearing receipt mint issued by the lending reserve
    pub a_token_mint: Pubkey,

    /// Lending pool program the assets are supplied to
    pub lending_program: Pubkey,

    /// Reserve of `asset_mint` inside the lending program
    pub lending_reserve: Pubkey,

    /// Underlying liquidity account of the reserve
    pub reserve_liquidity: Pubkey,

    /// Vault-owned staging account for deposits on their way to the reserve
    pub asset_treasury: Pubkey,

    /// Vault-owned aToken account
    pub a_token_treasury: Pubkey,

    /// Sum of the principal deposited by all users
    pub total_assets: u64,

    /// Association share applied to users without a custom percentage
    pub default_fees_bps: u16,

    /// Cumulative interest per unit of principal, scaled by INTEREST_INDEX_SCALE
    pub interest_index: u128,

    /// aToken balance already folded into `interest_index`
    pub accounted_balance: u64,

    /// Lifetime interest paid out to users
    pub total_user_interest_paid: u64,

    /// Lifetime interest paid out to associations
    pub total_association_interest_paid: u64,

    /// Bump seeds for PDA derivation
    pub bump: u8,
    pub asset_treasury_bump: u8,
    pub a_token_treasury_bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl Vault {
    pub const LEN: usize = 8 + // discriminator
        32 + // owner
        32 + // creator
        32 + // asset_mint
        32 + // a_token_mint
        32 + // lending_program
        32 + // lending_reserve
        32 + // reserve_liquidity
        32 + // asset_treasury
        32 + // a_token_treasury
        8 + // total_assets
        2 + // default_fees_bps
        16 + // interest_index
        8 + // accounted_balance
        8 + // total_user_interest_paid
        8 + // total_association_interest_paid
        1 + // bump
        1 + // asset_treasury_bump
        1 + // a_token_treasury_bump
        32; // _reserved

    /// Index the vault would hold after observing `a_token_balance`.
    pub fn projected_index(&self, a_token_balance: u64) -> Result<u128> {
        let growth = a_token_balance.saturating_sub(self.accounted_balance);
        let delta = index_delta(growth, self.total_assets)?;

        Ok(self
            .interest_index
            .checked_add(delta)
            .ok_or(VaultError::MathOverflow)?)
    }

    /// Fold the aToken growth since the last sync into the index.
    /// Growth seen while nothing is deposited belongs to nobody and is skipped.
    pub fn sync_interest(&mut self, a_token_balance: u64) -> Result<u64> {
        let growth = a_token_balance.saturating_sub(self.accounted_balance);

        self.interest_index = self.projected_index(a_token_balance)?;
        self.accounted_balance = a_token_balance;

        Ok(growth)
    }

    /// Interest earned by the whole vault and not yet paid out.
    pub fn global_interest(&self, a_token_balance: u64) -> u64 {
        a_token_balance.saturating_sub(self.total_assets)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_assets = self
            .total_assets
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        self.accounted_balance = self
            .accounted_balance
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Book `principal` plus the split interest leaving the lending reserve.
    pub fn record_withdrawal(&mut self, principal: u64, split: &InterestSplit) -> Result<()> {
        let leaving = principal
            .checked_add(split.total_interest)
            .ok_or(VaultError::MathOverflow)?;

        self.total_assets = self
            .total_assets
            .checked_sub(principal)
            .ok_or(VaultError::MathOverflow)?;
        self.accounted_balance = self
            .accounted_balance
            .checked_sub(leaving)
            .ok_or(VaultError::MathOverflow)?;
        self.total_user_interest_paid = self
            .total_user_interest_paid
            .checked_add(split.user_share)
            .ok_or(VaultError::MathOverflow)?;
        self.total_association_interest_paid = self
            .total_association_interest_paid
            .checked_add(split.association_share)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INTEREST_INDEX_SCALE;
    use crate::interest::split_interest;

    fn vault_with_principal(principal: u64) -> Vault {
        let mut vault = Vault::default();
        vault.record_deposit(principal).unwrap();
        vault
    }

    #[test]
    fn test_deposit_moves_totals_together() {
        let mut vault = vault_with_principal(1_000);
        vault.record_deposit(500).unwrap();

        assert_eq!(vault.total_assets, 1_500);
        assert_eq!(vault.accounted_balance, 1_500);
        assert_eq!(vault.global_interest(1_500), 0);
    }

    #[test]
    fn test_sync_folds_growth_into_index() {
        let mut vault = vault_with_principal(1_000_000);

        let growth = vault.sync_interest(1_010_000).unwrap();

        assert_eq!(growth, 10_000);
        assert_eq!(vault.interest_index, INTEREST_INDEX_SCALE / 100);
        assert_eq!(vault.accounted_balance, 1_010_000);
        assert_eq!(vault.global_interest(1_010_000), 10_000);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut vault = vault_with_principal(1_000_000);
        vault.sync_interest(1_010_000).unwrap();
        let index = vault.interest_index;

        assert_eq!(vault.sync_interest(1_010_000).unwrap(), 0);
        assert_eq!(vault.interest_index, index);
    }

    #[test]
    fn test_growth_without_principal_is_not_attributed() {
        let mut vault = Vault::default();

        vault.sync_interest(42).unwrap();

        assert_eq!(vault.interest_index, 0);
        assert_eq!(vault.accounted_balance, 42);
    }

    #[test]
    fn test_projection_does_not_mutate() {
        let vault = vault_with_principal(1_000_000);

        let projected = vault.projected_index(1_020_000).unwrap();

        assert_eq!(projected, INTEREST_INDEX_SCALE / 50);
        assert_eq!(vault.interest_index, 0);
        assert_eq!(vault.accounted_balance, 1_000_000);
    }

    #[test]
    fn test_withdrawal_books_principal_and_interest() {
        let mut vault = vault_with_principal(1_000_000);
        vault.sync_interest(1_010_000).unwrap();

        let split = split_interest(10_000, 2000).unwrap();
        vault.record_withdrawal(400_000, &split).unwrap();

        assert_eq!(vault.total_assets, 600_000);
        assert_eq!(vault.accounted_balance, 600_000);
        assert_eq!(vault.total_user_interest_paid, 8_000);
        assert_eq!(vault.total_association_interest_paid, 2_000);
    }

    #[test]
    fn test_withdrawal_beyond_total_assets_fails() {
        let mut vault = vault_with_principal(100);
        let split = InterestSplit::default();

        assert!(vault.record_withdrawal(101, &split).is_err());
    }
}
