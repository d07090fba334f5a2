use std::{
    convert::TryFrom,
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    AuthorizationCode,
}

impl FromStr for GrantType {
    type Err = UnsupportedGrantType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization_code" => Ok(Self::AuthorizationCode),
            other => Err(UnsupportedGrantType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported grant type {0:?}")]
pub struct UnsupportedGrantType(pub String);

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct ClientId(pub String);

impl FromStr for ClientId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(pub String);

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedirectUriError {
    #[error("redirect_uri is not an absolute URI: {0}")]
    Malformed(#[from] url::ParseError),
    #[error("redirect_uri cannot carry query parameters")]
    CannotBeABase,
    #[error("redirect_uri must not contain a fragment")]
    Fragment,
}

/// An absolute redirection endpoint that query parameters can be
/// appended to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUri(Url);

impl RedirectUri {
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<&str> for RedirectUri {
    type Error = RedirectUriError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(RedirectUriError::CannotBeABase);
        }
        if url.fragment().is_some() {
            return Err(RedirectUriError::Fragment);
        }
        Ok(Self(url))
    }
}

impl FromStr for RedirectUri {
    type Err = RedirectUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Serialize for RedirectUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RedirectUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::try_from(raw.as_str()).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct AuthCode(pub String);

impl AsRef<str> for AuthCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct AccessToken(pub String);

#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct RefreshToken(pub String);

/// Point in time after which a credential is no longer accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Expiry(SystemTime);

impl Expiry {
    pub fn after(issued_at: SystemTime, ttl: Duration) -> Self {
        Self(issued_at.checked_add(ttl).unwrap_or(issued_at))
    }

    /// Strictly after: a credential is still valid at its exact expiry instant.
    pub fn has_passed(&self, now: SystemTime) -> bool {
        now > self.0
    }

    pub fn as_system_time(&self) -> SystemTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_type_accepts_only_authorization_code() {
        assert_eq!(
            "authorization_code".parse::<GrantType>(),
            Ok(GrantType::AuthorizationCode)
        );
        assert!("client_credentials".parse::<GrantType>().is_err());
        assert!("".parse::<GrantType>().is_err());
    }

    #[test]
    fn redirect_uri_must_be_absolute() {
        assert!("https://example.com/cb".parse::<RedirectUri>().is_ok());
        assert!("/cb".parse::<RedirectUri>().is_err());
        assert!("example.com/cb".parse::<RedirectUri>().is_err());
    }

    #[test]
    fn redirect_uri_rejects_fragments_and_opaque_uris() {
        assert_eq!(
            "https://example.com/cb#frag".parse::<RedirectUri>(),
            Err(RedirectUriError::Fragment)
        );
        assert_eq!(
            "mailto:someone@example.com".parse::<RedirectUri>(),
            Err(RedirectUriError::CannotBeABase)
        );
    }

    #[test]
    fn expiry_is_exclusive_of_its_instant() {
        let issued = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let expiry = Expiry::after(issued, Duration::from_secs(3600));

        assert!(!expiry.has_passed(issued));
        assert!(!expiry.has_passed(issued + Duration::from_secs(3600)));
        assert!(expiry.has_passed(issued + Duration::from_secs(3601)));
    }

    #[test]
    fn client_secret_debug_is_redacted() {
        let secret = ClientSecret("hunter2".to_string());
        assert_eq!(format!("{:?}", secret), "ClientSecret(..)");
    }
}
