//! Username sanitization for provider-derived usernames.
//!
//! Identity providers hand us free-form strings (nicknames, the local part
//! of an email, `preferred_username`). Before one becomes a platform
//! username it is normalized to the platform's character whitelist; if
//! nothing usable survives, a random username is generated instead.
//! Collision avoidance against stored users belongs to the user store.

use tracing::warn;
use uuid::Uuid;

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 1;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Names that may never be used as a username
pub const RESERVED_USERNAMES: &[&str] = &["all", "channel", "here", "matterbot", "system"];

/// Turns a candidate username into one the platform accepts
pub trait UsernameSanitizer: Send + Sync {
    /// Produce the final username for a candidate
    fn clean(&self, candidate: &str) -> String;
}

/// Platform username rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUsernameSanitizer;

impl UsernameSanitizer for DefaultUsernameSanitizer {
    fn clean(&self, candidate: &str) -> String {
        let mut name = candidate.replace(' ', "-").to_lowercase();

        if RESERVED_USERNAMES.contains(&name.as_str()) {
            name.clear();
        }

        let cleaned: String = name
            .trim()
            .chars()
            .map(|c| if is_valid_username_char(c) { c } else { '-' })
            .collect();
        let cleaned = cleaned.trim_matches('-');

        if is_valid_username(cleaned) {
            return cleaned.to_string();
        }

        let generated = format!("a{}", Uuid::new_v4().simple());
        warn!(
            candidate_len = candidate.len(),
            "Generating new username since provided username was invalid"
        );
        generated
    }
}

fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_')
}

/// Whether `name` is acceptable as a platform username as-is
pub fn is_valid_username(name: &str) -> bool {
    if name.len() < USERNAME_MIN_LENGTH || name.len() > USERNAME_MAX_LENGTH {
        return false;
    }

    if !name.chars().all(is_valid_username_char) {
        return false;
    }

    // Must start with a letter
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return false;
    }

    !RESERVED_USERNAMES.contains(&name)
}
