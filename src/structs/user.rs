use std::fmt;

use serde::{Deserialize, Serialize};

/// User object returned inside a successful `login`, `register`, or
/// `license_login` response.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub username: String,
    /// IP address the server saw the user connect from. May be empty.
    pub ip: String,
    /// HWID the account is bound to. May be empty if no binding exists yet.
    pub hwid: String,
    /// Account creation time, seconds since epoch.
    #[serde(rename = "createdate")]
    pub create_date: i64,
    /// Last login time, seconds since epoch.
    #[serde(rename = "lastlogin")]
    pub last_login: i64,
    /// Subscriptions in the order the server sent them.
    pub subscriptions: Vec<Subscription>,
}

/// Subscription object which is used within the `UserInfo` object.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// Tier name (e.g. "pro").
    #[serde(rename = "subscription")]
    pub tier: String,
    pub key: String,
    /// Timestamp of when the subscription expires.
    pub expiry: i64,
    /// Remaining validity in seconds.
    #[serde(rename = "timeleft")]
    pub time_left: i64,
}

/// Human-readable account summary. Empty IP/HWID lines are skipped and
/// subscriptions keep their server order.
impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Info:")?;
        writeln!(f, "  Username: {}", self.username)?;
        if !self.ip.is_empty() {
            writeln!(f, "  IP: {}", self.ip)?;
        }
        if !self.hwid.is_empty() {
            writeln!(f, "  HWID: {}", self.hwid)?;
        }
        for sub in &self.subscriptions {
            writeln!(
                f,
                "  -> {} | Expiry: {} | Left: {}",
                sub.tier, sub.expiry, sub.time_left
            )?;
        }
        Ok(())
    }
}
