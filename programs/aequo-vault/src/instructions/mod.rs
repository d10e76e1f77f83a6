pub mod initialize_vault;
pub mod deposit;
pub mod withdraw;
pub mod claim_interest;
pub mod set_association_whitelist;
pub mod set_associated_association;
pub mod set_fees;
pub mod transfer_ownership;
pub mod views;

pub use initialize_vault::*;
pub use deposit::*;
pub use withdraw::*;
pub use claim_interest::*;
pub use set_association_whitelist::*;
pub use set_associated_association::*;
pub use set_fees::*;
pub use transfer_ownership::*;
pub use views::*;
