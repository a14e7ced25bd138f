use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Message;

/// Body of a `/messages` list response. The upstream returns either an
/// `error` or a `messages` list with its `pagination` envelope; callers
/// classify which one they got.
#[derive(Serialize, Deserialize)]
pub struct MessagesEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageInfo>,
}

/// Body of a `/messages/{id}` response.
#[derive(Serialize, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// The upstream's report of the pagination it actually applied to a
/// response. `filter` may be omitted when no filters were active.
#[derive(Serialize, Deserialize, Clone)]
pub struct PageInfo {
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
    pub sort: Sort,
    #[serde(default)]
    pub filter: BTreeMap<String, String>,
    pub total: i64,
}

/// Error payload the upstream embeds in a response body. Both fields are
/// optional on the wire.
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

/// Sort order for API results, encoded as `asc`/`desc` on the wire.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Ascending order (oldest/smallest first).
    Asc,
    /// Descending order (newest/largest first). This is the default.
    #[default]
    Desc,
}
impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sort::Asc => "asc",
                Sort::Desc => "desc",
            }
        )
    }
}
