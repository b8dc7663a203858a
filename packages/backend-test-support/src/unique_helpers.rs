//! Test helpers for generating unique test data
//!
//! ULID-based helpers that keep concurrently running tests from colliding on
//! unique columns (league names, emails).

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("league");
/// let b = unique_str("league");
/// assert_ne!(a, b);
/// assert!(a.starts_with("league-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("scorer");
/// assert!(email.starts_with("scorer-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
