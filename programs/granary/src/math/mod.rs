pub mod accrual;
pub mod fixed_point;
pub mod oracle;
pub mod schedule;

pub use accrual::*;
pub use fixed_point::*;
pub use oracle::*;
pub use schedule::*;
