use reqwest::blocking::Client as HttpClient;
use url::form_urlencoded;

use crate::errors::AuthError;
use crate::hwid::{HwidProvider, SystemHwid};
use crate::structs::user::UserInfo;
use crate::structs::ApiResponse;

/// Production AuthSecure API endpoint. Every operation posts here.
pub const BASE_URL: &str = "https://www.authsecure.shop/post/api.php";

/// AuthSecure client. Used to interact with the AuthSecure API.
///
/// Construction stores the application identity; [`Client::init`] opens the
/// session that the three account operations then ride on.
pub struct Client {
    name: String,
    owner_id: String,
    secret: String,
    version: String,
    debug: bool,
    base_url: String,
    /// Set by a successful `init`, echoed back on every later request.
    session_id: Option<String>,
    http: HttpClient,
    hwid_provider: Box<dyn HwidProvider + Send + Sync>,
}

/// AuthSecure client options. Pass this into the `new()` function of the
/// AuthSecure Client.
#[derive(Default, Debug, Clone)]
pub struct ClientOptions {
    /// Application name as registered on the AuthSecure dashboard.
    pub name: String,
    /// Account id of the application owner.
    pub owner_id: String,
    /// Application secret. Only sent on `init`.
    pub secret: String,
    /// Application version string, checked server-side.
    pub version: String,
    /// Whether the client should print debug statements.
    pub debug: bool,
}

impl Client {
    /// Creates a new AuthSecure client against the production endpoint.
    /// No network traffic happens until [`Client::init`].
    pub fn new(options: ClientOptions) -> Self {
        Self::with_base_url(options, BASE_URL)
    }

    /// Creates a client against a custom endpoint. Used by embedders and
    /// tests that point the client at a local server.
    pub fn with_base_url(options: ClientOptions, base_url: impl Into<String>) -> Self {
        Self {
            name: options.name,
            owner_id: options.owner_id,
            secret: options.secret,
            version: options.version,
            debug: options.debug,
            base_url: base_url.into(),
            session_id: None,
            http: HttpClient::new(),
            hwid_provider: Box::new(SystemHwid),
        }
    }

    /// Replaces the machine-id source used for device binding.
    pub fn with_hwid_provider(
        mut self,
        provider: Box<dyn HwidProvider + Send + Sync>,
    ) -> Self {
        self.hwid_provider = provider;
        self
    }

    /// Session identifier issued by the last successful `init` call.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Opens a session for this application.
    ///
    /// Any error here is unrecoverable for the caller's auth flow: without a
    /// session the account operations cannot succeed. The error is still
    /// returned rather than aborting the process, so embedders decide what
    /// a failed `init` means for them.
    pub fn init(&mut self) -> Result<(), AuthError> {
        self.debug_print("[AUTH] Connecting...");

        let payload = [
            ("type", "init"),
            ("name", self.name.as_str()),
            ("ownerid", self.owner_id.as_str()),
            ("secret", self.secret.as_str()),
            ("ver", self.version.as_str()),
        ];

        let resp = self.send(&payload)?;

        if !resp.success {
            self.debug_print("[AUTH] Init rejected.");
            return Err(AuthError::Rejected(resp.message));
        }

        self.session_id = Some(resp.session_id);
        self.debug_print("[AUTH] Initialized successfully.");
        Ok(())
    }

    /// Authenticates a username/password pair.
    ///
    /// Returns the account data when the server accepts the credentials;
    /// the server may legitimately omit it, hence the `Option`.
    pub fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<UserInfo>, AuthError> {
        let hwid = self.hwid_provider.hwid();
        let payload = [
            ("type", "login"),
            ("sessionid", self.session_id().unwrap_or("")),
            ("username", username),
            ("pass", password),
            ("hwid", hwid.as_str()),
            ("name", self.name.as_str()),
            ("ownerid", self.owner_id.as_str()),
        ];

        accepted(self.send(&payload)?)
    }

    /// Creates an account, redeeming a license key for its subscription.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        license: &str,
    ) -> Result<Option<UserInfo>, AuthError> {
        let hwid = self.hwid_provider.hwid();
        let payload = [
            ("type", "register"),
            ("sessionid", self.session_id().unwrap_or("")),
            ("username", username),
            ("pass", password),
            ("license", license),
            ("hwid", hwid.as_str()),
            ("name", self.name.as_str()),
            ("ownerid", self.owner_id.as_str()),
        ];

        accepted(self.send(&payload)?)
    }

    /// Authenticates with a license key alone, no account credentials.
    pub fn license_login(&self, license: &str) -> Result<Option<UserInfo>, AuthError> {
        let hwid = self.hwid_provider.hwid();
        let payload = [
            ("type", "license"),
            ("sessionid", self.session_id().unwrap_or("")),
            ("license", license),
            ("hwid", hwid.as_str()),
            ("name", self.name.as_str()),
            ("ownerid", self.owner_id.as_str()),
        ];

        accepted(self.send(&payload)?)
    }

    /// Posts a form-encoded payload to the API and decodes the envelope.
    fn send(&self, payload: &[(&str, &str)]) -> Result<ApiResponse, AuthError> {
        let body = encode_form(payload);

        let response = self
            .http
            .post(&self.base_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()?;

        let text = response.text()?;

        serde_json::from_str::<ApiResponse>(&text)
            .map_err(|source| AuthError::DecodeFailed { source, body: text })
    }

    fn debug_print(&self, msg: &str) {
        if !self.debug {
            return;
        }

        #[cfg(windows)]
        println!("{}", msg);

        #[cfg(not(windows))]
        {
            use colorful::{Color, Colorful};
            println!(
                "{}",
                msg.gradient_with_color(Color::Cyan, Color::SpringGreen4)
            );
        }
    }
}

/// The success flag gates interpretation of the rest of the envelope:
/// a rejected response never yields account data, even if the server
/// happened to populate `info`.
fn accepted(resp: ApiResponse) -> Result<Option<UserInfo>, AuthError> {
    if resp.success {
        Ok(resp.info)
    } else {
        Err(AuthError::Rejected(resp.message))
    }
}

/// Encodes a payload as an `application/x-www-form-urlencoded` body:
/// `key=value` pairs joined with `&`, no trailing separator.
///
/// Values are percent-encoded, so credentials containing `&`, `=`, or
/// newlines survive the trip intact.
pub(crate) fn encode_form(pairs: &[(&str, &str)]) -> String {
    let mut body = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        body.append_pair(key, value);
    }
    body.finish()
}
