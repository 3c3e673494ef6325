pub mod errors;
pub mod hwid;
pub mod structs;

pub use errors::AuthError;
pub use hwid::{HwidProvider, SystemHwid, UNKNOWN_HWID};
pub use structs::client::{Client, ClientOptions};
pub use structs::user::{Subscription, UserInfo};
pub use structs::{ApiResponse, AppInfo};
