pub mod pool;
pub mod user_info;
pub mod vault_state;

pub use pool::*;
pub use user_info::*;
pub use vault_state::*;
