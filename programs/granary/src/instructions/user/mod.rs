pub mod deposit;
pub mod emergency_withdraw;
pub mod harvest;
pub mod settle_pool;
pub mod settle_pools;
pub mod withdraw;

pub use deposit::*;
pub use emergency_withdraw::*;
pub use harvest::*;
pub use settle_pool::*;
pub use settle_pools::*;
pub use withdraw::*;
