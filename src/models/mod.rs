use serde::{Deserialize, Serialize};

/// A remote content record. Only the fields the screen consumes are modeled;
/// extra payload fields (e.g. `userId`) are ignored on decode, while a missing
/// consumed field fails the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}
