use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored text snippet.
///
/// Snippets are never updated after insertion. A snippet whose `expires`
/// timestamp has passed is treated as absent by every read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: Timestamp,
    pub expires: Timestamp,
}

