pub mod admin;
pub mod flash;
pub mod keeper;
pub mod user;

pub use admin::*;
pub use flash::*;
pub use keeper::*;
pub use user::*;
