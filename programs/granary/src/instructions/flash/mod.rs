pub mod flash_borrow;
pub mod flash_repay;

pub use flash_borrow::*;
pub use flash_repay::*;
