use anchor_lang::prelude::*;

#[account]
#[derive(Default)]
pub struct Association {
    /// Vault this record belongs to
    pub vault: Pubkey,

    /// Association wallet receiving its share of the interest
    pub association: Pubkey,

    /// Whether users may pick this association
    pub whitelisted: bool,

    /// Interest received over the lifetime of the vault
    pub total_received: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Association {
    pub const LEN: usize = 8 + // discriminator
        32 + // vault
        32 + // association
        1 + // whitelisted
        8 + // total_received
        1; // bump

    pub fn record_donation(&mut self, amount: u64) -> Result<()> {
        self.total_received = self
            .total_received
            .checked_add(amount)
            .ok_or(crate::errors::VaultError::MathOverflow)?;
        Ok(())
    }
}
