pub mod client;
pub mod user;

use serde::{Deserialize, Serialize};

use crate::structs::user::UserInfo;

/// Application metadata echoed back by the server on every call.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

/// Envelope returned by the AuthSecure API for every operation.
///
/// Failure responses omit most fields, so everything falls back to its
/// default when absent.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "sessionid")]
    pub session_id: String,
    #[serde(rename = "appinfo")]
    pub app_info: AppInfo,
    /// Account data. Only meaningful when `success` is true; `init`
    /// responses never include it.
    pub info: Option<UserInfo>,
}
