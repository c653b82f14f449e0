//! Secret detection and redaction utilities.
//!
//! Destination payloads carry credentials inside `auth` (`accessKey`,
//! `secretAccessKey`, `publicKey`, ...). These helpers decide which keys must
//! never reach logs or error metadata in clear text.

/// The redacted placeholder string.
pub const REDACTED: &str = "[REDACTED]";

const SECRET_MARKERS: [&str; 6] = ["KEY", "TOKEN", "SECRET", "PASSWORD", "CREDENTIAL", "AUTH"];

/// Checks if a key/variable name likely refers to a secret.
///
/// Uses case-insensitive substring matching against common secret naming
/// conventions.
///
/// # Examples
///
/// ```
/// use destination_guard_shared::is_secret_key;
///
/// assert!(is_secret_key("secretAccessKey"));
/// assert!(is_secret_key("auth"));
/// assert!(!is_secret_key("region"));
/// ```
pub fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_uppercase();
    SECRET_MARKERS.iter().any(|marker| key.contains(marker))
}

/// Redacts a value if the key is likely a secret.
///
/// # Examples
///
/// ```
/// use destination_guard_shared::redact_if_secret;
///
/// assert_eq!(redact_if_secret("accessKey", "AKIA123"), "[REDACTED]");
/// assert_eq!(redact_if_secret("cloud", "aws"), "aws");
/// ```
pub fn redact_if_secret(key: &str, value: &str) -> String {
    if is_secret_key(key) {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_destination_credential_keys() {
        assert!(is_secret_key("accessKey"));
        assert!(is_secret_key("secretAccessKey"));
        assert!(is_secret_key("publicKey"));
        assert!(is_secret_key("auth"));
        assert!(is_secret_key("DB_PASSWORD"));
        assert!(is_secret_key("refresh_token"));
        assert!(is_secret_key("credentials"));
    }

    #[test]
    fn leaves_descriptive_keys_alone() {
        assert!(!is_secret_key("cloud"));
        assert!(!is_secret_key("product"));
        assert!(!is_secret_key("region"));
        assert!(!is_secret_key("principalType"));
        assert!(!is_secret_key("grantedEmail"));
    }

    #[test]
    fn redacts_only_secret_values() {
        assert_eq!(redact_if_secret("secretAccessKey", "s3cr3t"), REDACTED);
        assert_eq!(redact_if_secret("region", "us-east-1"), "us-east-1");
    }
}
