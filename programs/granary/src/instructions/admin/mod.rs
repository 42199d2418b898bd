pub mod add_pool;
pub mod initialize_farm;
pub mod revoke_authorized_caller;
pub mod set_authorized_caller;
pub mod set_emission_rate;
pub mod set_farm_policy;
pub mod set_flash_config;
pub mod set_pool;

pub use add_pool::*;
pub use initialize_farm::*;
pub use revoke_authorized_caller::*;
pub use set_authorized_caller::*;
pub use set_emission_rate::*;
pub use set_farm_policy::*;
pub use set_flash_config::*;
pub use set_pool::*;
