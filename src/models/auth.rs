use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login form fields; also the JSON body of the sign-in request
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Update one field by its input `name`, leaving the other untouched.
    /// Returns `false` when the name matches no field.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "username" => self.username = value.to_string(),
            "password" => self.password = value.to_string(),
            _ => return false,
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    pub token: String,
    /// Expiry as milliseconds since the Unix epoch
    pub expired: i64,
}

impl SignInResponse {
    pub fn into_grant(self) -> SignInGrant {
        SignInGrant {
            token: SessionToken {
                value: self.token,
                expires_at: DateTime::<Utc>::from_timestamp_millis(self.expired),
            },
        }
    }
}

/// Result of a successful sign-in
#[derive(Clone, PartialEq, Debug)]
pub struct SignInGrant {
    pub token: SessionToken,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CheckSessionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Bearer credential issued at sign-in.
///
/// `expires_at` is only known right after sign-in; a token read back from the
/// cookie jar carries `None` because the browser hides cookie attributes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SessionToken {
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionToken {
    pub fn new(value: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }

    /// `expires` attribute value in HTTP-date format
    pub fn cookie_expires(&self) -> Option<String> {
        self.expires_at
            .map(|expiry| expiry.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn set_field_merges_single_field() {
        let mut credentials = Credentials::default();
        assert!(credentials.set_field("username", "admin@example.com"));
        assert!(credentials.set_field("password", "secret"));
        assert!(credentials.set_field("username", "other@example.com"));

        assert_eq!(credentials.username, "other@example.com");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn set_field_ignores_unknown_names() {
        let mut credentials = Credentials::default();
        assert!(!credentials.set_field("email", "x"));
        assert!(credentials.is_empty());
    }

    #[test]
    fn sign_in_response_converts_millis_expiry() {
        let response: SignInResponse = serde_json::from_str(
            r#"{"success":true,"message":"登入成功","uid":"u1","token":"abc","expired":1700000000000}"#,
        )
        .unwrap();

        let grant = response.into_grant();
        assert_eq!(grant.token.value, "abc");
        assert_eq!(
            grant.token.expires_at,
            Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        );
    }

    #[test]
    fn cookie_expires_uses_http_date() {
        let token = SessionToken::new("abc", Some(Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap()));
        assert_eq!(
            token.cookie_expires().as_deref(),
            Some("Tue, 05 Mar 2024 07:08:09 GMT")
        );
    }

    #[test]
    fn token_without_expiry_never_expires_locally() {
        let token = SessionToken::new("abc", None);
        assert!(!token.is_expired(Utc::now()));
        assert_eq!(token.cookie_expires(), None);
    }
}
