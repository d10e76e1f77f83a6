use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Deposit amount must be greater than zero")]
    ZeroDeposit,

    #[msg("Withdraw amount must be greater than zero")]
    ZeroWithdraw,

    #[msg("User has no deposits")]
    NoDeposit,

    #[msg("Insufficient deposited balance")]
    InsufficientBalance,

    #[msg("No interest to claim")]
    NoInterestToClaim,

    #[msg("No associated association set for user")]
    NoAssociatedAssociation,

    #[msg("Association is not whitelisted")]
    AssociationNotWhitelisted,

    #[msg("User fees percentage exceeds maximum")]
    UserFeesTooHigh,

    #[msg("Default fees percentage exceeds maximum")]
    DefaultFeesTooHigh,

    #[msg("Unauthorized: caller is not the vault owner")]
    Unauthorized,

    #[msg("New owner cannot be the default address")]
    InvalidOwner,

    #[msg("Token mint does not match the vault asset")]
    MintMismatch,

    #[msg("Token account owner does not match the expected wallet")]
    OwnerMismatch,

    #[msg("Treasury account does not match the vault treasury")]
    InvalidTreasury,

    #[msg("Lending program does not match the vault configuration")]
    InvalidLendingProgram,

    #[msg("Lending reserve is invalid for this asset")]
    InvalidLendingReserve,

    #[msg("aToken mint does not match the lending reserve")]
    InvalidATokenMint,

    #[msg("Math overflow")]
    MathOverflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revert_reasons_shown_to_users() {
        assert_eq!(VaultError::NoDeposit.to_string(), "User has no deposits");
        assert_eq!(
            VaultError::NoAssociatedAssociation.to_string(),
            "No associated association set for user"
        );
        assert_eq!(
            VaultError::AssociationNotWhitelisted.to_string(),
            "Association is not whitelisted"
        );
        assert_eq!(
            VaultError::InsufficientBalance.to_string(),
            "Insufficient deposited balance"
        );
    }
}
