pub mod liquidate;

pub use liquidate::*;
