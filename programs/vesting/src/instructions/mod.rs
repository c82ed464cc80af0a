pub mod add_beneficiaries;
pub mod emit_vesting_quote;
pub mod initialize;
pub mod lock;
pub mod release;
pub mod set_fees;
pub mod set_token_address;
pub mod transfer_ownership;

pub use add_beneficiaries::*;
pub use emit_vesting_quote::*;
pub use initialize::*;
pub use lock::*;
pub use release::*;
pub use set_fees::*;
pub use set_token_address::*;
pub use transfer_ownership::*;
