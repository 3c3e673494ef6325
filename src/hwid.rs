use hardware_id::get_id;

/// Sentinel returned when no stable machine identifier can be read.
/// Callers must treat this value as "unknown", never as a usable id.
pub const UNKNOWN_HWID: &str = "UNKNOWN_HWID";

/// Source of the machine identifier attached to device-bound requests.
/// The AuthSecure server matches it against the HWID stored with the
/// user's subscription.
pub trait HwidProvider {
    /// Returns a stable machine identifier, or [`UNKNOWN_HWID`] when none
    /// is available. Never fails.
    fn hwid(&self) -> String;
}

/// Default provider backed by the platform machine id.
pub struct SystemHwid;

impl HwidProvider for SystemHwid {
    fn hwid(&self) -> String {
        hwid_or_sentinel(get_id())
    }
}

pub(crate) fn hwid_or_sentinel<E>(result: Result<String, E>) -> String {
    result.unwrap_or_else(|_| UNKNOWN_HWID.to_string())
}
