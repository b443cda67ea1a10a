//! Session derivation and administrator checks.
//!
//! The identity source sits behind a capability trait so a real provider can
//! replace the simulated one without touching session handling.

use crate::error::AuthError;
use crate::types::{Email, Session};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The single account authorized to add movies. Compared after the
/// lowercasing performed at sign-in.
pub const ADMIN_EMAIL: &str = "pamodmalith70@gmail.com";

/// Characters escaped in the avatar URL query value. Mirrors JavaScript's
/// `encodeURIComponent` unreserved set.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Capability seam for the identity source.
pub trait IdentityProvider {
    fn sign_in(&self, raw_input: &str) -> Result<Session, AuthError>;
}

/// Derives a deterministic session from a user-supplied email string, the
/// way the simulated sign-in popup does.
#[derive(Debug, Default)]
pub struct SimulatedIdentityProvider;

impl IdentityProvider for SimulatedIdentityProvider {
    fn sign_in(&self, raw_input: &str) -> Result<Session, AuthError> {
        let email = Email::try_from(raw_input).map_err(|_| AuthError::InvalidEmail)?;

        let local_part = email.split('@').next().unwrap_or_default();
        let display_name = derive_display_name(local_part);
        let avatar_url = avatar_url(&display_name);

        Ok(Session {
            email,
            display_name,
            avatar_url,
        })
    }
}

/// True iff the session belongs to the hardcoded administrator account.
pub fn is_administrator(session: &Session) -> bool {
    session.email.as_str() == ADMIN_EMAIL
}

/// Uppercases the first character of the local part and replaces every
/// non-alphanumeric character of the remainder with a space.
fn derive_display_name(local_part: &str) -> String {
    let mut chars = local_part.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut name: String = first.to_uppercase().collect();
    name.extend(chars.map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' }));
    name
}

/// Deterministic templated avatar URL derived from the display name.
fn avatar_url(display_name: &str) -> String {
    let name = utf8_percent_encode(display_name, QUERY_VALUE);
    format!("https://ui-avatars.com/api/?name={name}&background=random&color=fff&size=128")
}
