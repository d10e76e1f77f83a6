use anchor_lang::prelude::*;

use crate::errors::VaultError;
use crate::interest::accrued_since;

#[account]
#[derive(Default)]
pub struct UserPosition {
    /// Vault this position belongs to
    pub vault: Pubkey,

    /// Depositor wallet
    pub user: Pubkey,

    /// Principal currently deposited
    pub deposited_amount: u64,

    /// Association receiving part of this user's interest (default key = none)
    pub associated_association: Pubkey,

    /// Association share chosen by the user, overriding the vault default
    pub custom_fees_bps: Option<u16>,

    /// Vault interest index at the last settlement
    pub interest_checkpoint: u128,

    /// Interest settled but not yet paid out
    pub accrued_interest: u64,

    /// Lifetime interest (both shares) paid out for this position
    pub total_interest_claimed: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl UserPosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        32 + // user
        8 + // deposited_amount
        32 + // associated_association
        1 + 2 + // Option<custom_fees_bps>
        16 + // interest_checkpoint
        8 + // accrued_interest
        8 + // total_interest_claimed
        1; // bump

    /// Fill in identity fields on a freshly created account. The checkpoint starts at
    /// the current index so a new position never inherits earlier interest.
    pub fn init_if_fresh(&mut self, vault: Pubkey, user: Pubkey, bump: u8, index: u128) {
        if self.vault == Pubkey::default() {
            self.vault = vault;
            self.user = user;
            self.bump = bump;
            self.interest_checkpoint = index;
        }
    }

    pub fn has_association(&self) -> bool {
        self.associated_association != Pubkey::default()
    }

    pub fn effective_fees_bps(&self, default_fees_bps: u16) -> u16 {
        self.custom_fees_bps.unwrap_or(default_fees_bps)
    }

    /// Interest owed at `index`, without moving the checkpoint.
    pub fn pending_interest(&self, index: u128) -> Result<u64> {
        let earned = accrued_since(self.deposited_amount, self.interest_checkpoint, index)?;

        Ok(self
            .accrued_interest
            .checked_add(earned)
            .ok_or(VaultError::MathOverflow)?)
    }

    /// Move everything earned up to `index` into `accrued_interest`.
    /// Must run before `deposited_amount` changes.
    pub fn settle(&mut self, index: u128) -> Result<u64> {
        self.accrued_interest = self.pending_interest(index)?;
        self.interest_checkpoint = index;
        Ok(self.accrued_interest)
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    /// Remove `principal` and pay out all settled interest.
    pub fn record_withdrawal(&mut self, principal: u64) -> Result<()> {
        require!(
            principal <= self.deposited_amount,
            VaultError::InsufficientBalance
        );

        self.deposited_amount -= principal;
        self.total_interest_claimed = self
            .total_interest_claimed
            .checked_add(self.accrued_interest)
            .ok_or(VaultError::MathOverflow)?;
        self.accrued_interest = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INTEREST_INDEX_SCALE;

    fn position(deposited: u64) -> UserPosition {
        let mut position = UserPosition::default();
        position.init_if_fresh(Pubkey::new_unique(), Pubkey::new_unique(), 254, 0);
        position.record_deposit(deposited).unwrap();
        position
    }

    #[test]
    fn test_fresh_position_starts_at_current_index() {
        let mut position = UserPosition::default();
        let vault = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        position.init_if_fresh(vault, user, 7, 5 * INTEREST_INDEX_SCALE);

        assert_eq!(position.vault, vault);
        assert_eq!(position.user, user);
        assert_eq!(position.bump, 7);
        assert_eq!(position.interest_checkpoint, 5 * INTEREST_INDEX_SCALE);

        // second call leaves an existing position untouched
        position.init_if_fresh(Pubkey::new_unique(), Pubkey::new_unique(), 1, 0);
        assert_eq!(position.vault, vault);
        assert_eq!(position.interest_checkpoint, 5 * INTEREST_INDEX_SCALE);
    }

    #[test]
    fn test_settle_before_top_up_keeps_old_interest_on_old_principal() {
        let mut position = position(1_000);

        // 1% growth
        let index = INTEREST_INDEX_SCALE / 100;
        assert_eq!(position.settle(index).unwrap(), 10);

        position.record_deposit(9_000).unwrap();
        assert_eq!(position.pending_interest(index).unwrap(), 10);

        let later = index + INTEREST_INDEX_SCALE / 100;
        assert_eq!(position.pending_interest(later).unwrap(), 110);
    }

    #[test]
    fn test_effective_fees_prefers_custom() {
        let mut position = position(0);
        assert_eq!(position.effective_fees_bps(2000), 2000);

        position.custom_fees_bps = Some(0);
        assert_eq!(position.effective_fees_bps(2000), 0);

        position.custom_fees_bps = Some(1000);
        assert_eq!(position.effective_fees_bps(2000), 1000);
    }

    #[test]
    fn test_withdrawal_cannot_exceed_principal() {
        let mut position = position(500);

        assert!(position.record_withdrawal(501).is_err());
        assert_eq!(position.deposited_amount, 500);
    }

    #[test]
    fn test_full_withdrawal_zeroes_position() {
        let mut position = position(500);
        position.settle(INTEREST_INDEX_SCALE / 10).unwrap();

        position.record_withdrawal(500).unwrap();

        assert_eq!(position.deposited_amount, 0);
        assert_eq!(position.accrued_interest, 0);
        assert_eq!(position.total_interest_claimed, 50);
        assert_eq!(position.pending_interest(INTEREST_INDEX_SCALE).unwrap(), 0);
    }

    #[test]
    fn test_association_unset_by_default() {
        let mut position = position(0);
        assert!(!position.has_association());

        position.associated_association = Pubkey::new_unique();
        assert!(position.has_association());
    }
}
