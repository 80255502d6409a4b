//! Structured connection strings
//!
//! Every dialect describes its DSN as a [`ConnectionString`] and relies on
//! one serialization rule:
//!
//! ```text
//! [scheme "://"] [userinfo "@"] host ["/" path] ["?" params]
//! ```
//!
//! The `/` before the path is only written when both host and path are
//! non-empty and the path does not already start with `/`.

use crate::QueryParams;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

/// Bytes kept verbatim in the username and password
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

const REDACTED_PASSWORD: &str = "xxxxx";

/// Username and password of a connection string
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: Option<String>,
}

impl Credentials {
    /// Credentials with a username only
    pub fn user(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Credentials with a username and a password.
    ///
    /// The password separator is always written, even for an empty password.
    pub fn user_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, redact: bool) -> fmt::Result {
        write!(f, "{}", utf8_percent_encode(&self.username, USERINFO))?;
        if let Some(password) = &self.password {
            if redact {
                write!(f, ":{}", REDACTED_PASSWORD)?;
            } else {
                write!(f, ":{}", utf8_percent_encode(password, USERINFO))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED_PASSWORD))
            .finish()
    }
}

/// A dialect-independent representation of a DSN
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    /// URI scheme without `://` (e.g. "oracle"); `None` for scheme-less DSNs
    pub scheme: Option<String>,
    pub credentials: Option<Credentials>,
    /// Host token, written verbatim (may be a driver token such as `tcp(host)`)
    pub host: String,
    pub path: String,
    pub params: QueryParams,
}

impl ConnectionString {
    /// Create an empty connection string for the given host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Render the DSN with the password masked, for logs and terminal output
    pub fn redacted(&self) -> String {
        Redacted(self).to_string()
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, redact: bool) -> fmt::Result {
        if let Some(scheme) = self.scheme.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "{}://", scheme)?;
        }
        if let Some(credentials) = &self.credentials {
            credentials.write(f, redact)?;
            f.write_str("@")?;
        }
        f.write_str(&self.host)?;
        if !self.path.is_empty() && !self.host.is_empty() && !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;
        if !self.params.is_empty() {
            write!(f, "?{}", self.params.encode())?;
        }
        Ok(())
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

struct Redacted<'a>(&'a ConnectionString);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, true)
    }
}
