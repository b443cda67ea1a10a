use crate::types::Email;
use serde::{Deserialize, Serialize};

/// The locally represented identity of the signed-in user. At most one per
/// store; absence of the persisted session denotes signed-out.
///
/// Wire shape keeps the provider's field names: `{email, displayName,
/// photoURL}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: Email,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub avatar_url: String,
}
