pub mod deposit;
pub mod emit_pending_rewards;
pub mod emit_vault_status;
pub mod initialize;
pub mod set_close_block;
pub mod set_delegate;
pub mod set_fees;
pub mod set_start_block;
pub mod set_token_address;
pub mod transfer_ownership;
pub mod withdraw;
pub mod withdraw_emergency;
pub mod withdraw_remaining;

pub use deposit::*;
pub use emit_pending_rewards::*;
pub use emit_vault_status::*;
pub use initialize::*;
pub use set_close_block::*;
pub use set_delegate::*;
pub use set_fees::*;
pub use set_start_block::*;
pub use set_token_address::*;
pub use transfer_ownership::*;
pub use withdraw::*;
pub use withdraw_emergency::*;
pub use withdraw_remaining::*;
