pub mod authorized_caller;
pub mod farm;
pub mod flash_loan;
pub mod pool;
pub mod position;

pub use authorized_caller::*;
pub use farm::*;
pub use flash_loan::*;
pub use pool::*;
pub use position::*;
