//! Cursor-paginated access to the messages catalog.

use std::collections::BTreeMap;

use mediagraph_api::types::Message;
use mediagraph_api::{Client, Error, MessageQuery};

use crate::cursor::CursorState;
use crate::errors::PaginationError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Forward-pagination arguments: an optional cursor to resume after, and the
/// number of records to fetch.
#[derive(Clone, Debug)]
pub struct PageArgs {
    pub after: Option<String>,
    pub first: i64,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            after: None,
            first: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageArgs {
    pub fn with_first(mut self, first: i64) -> Self {
        self.first = first;
        self
    }
    pub fn with_after(mut self, after: &str) -> Self {
        self.after = Some(after.to_string());
        self
    }
}

/// One record paired with the cursor that resumes iteration immediately
/// after it.
pub struct Edge {
    pub node: Message,
    pub cursor: String,
}

/// One page of edges, in upstream order, plus the upstream-reported total.
pub struct MessageConnection {
    pub edges: Vec<Edge>,
    total: i64,
}

impl MessageConnection {
    /// The upstream's total for the whole result set, passed through
    /// unmodified. Reading it repeatedly is free of side effects.
    pub fn total_count(&self) -> i64 {
        self.total
    }
}

/// Translates filter + cursor requests into upstream fetches and upstream
/// pages into cursor-annotated edge lists.
///
/// Each call is an independent unit of work: one upstream round-trip, no
/// state shared between invocations.
pub struct Paginator {
    client: Client,
}

impl Paginator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of messages.
    ///
    /// With no `after` cursor, `filters` and `first` shape the request. A
    /// decoded cursor overrides every working parameter, so resuming
    /// continues in the filter and sort context the cursor was minted under.
    /// A cursor that does not decode fails with
    /// [`PaginationError::InvalidCursor`] before any upstream call.
    pub async fn fetch_page(
        &self,
        filters: &BTreeMap<String, String>,
        page: PageArgs,
    ) -> Result<MessageConnection, PaginationError> {
        let mut query = MessageQuery::default()
            .with_limit(page.first)
            .with_filters(filters.clone());
        if let Some(after) = &page.after {
            let state = CursorState::decode(after).map_err(|e| {
                tracing::error!("Failed to decode 'after' cursor: {}", e);
                PaginationError::InvalidCursor {
                    cursor: after.clone(),
                }
            })?;
            query = state.into_query();
        }

        let envelope = match self.client.get_messages(&query).await {
            Ok(envelope) => envelope,
            Err(Error::MalformedBody) => {
                return Err(PaginationError::Upstream {
                    message: "upstream response was not a messages page".to_string(),
                    code: None,
                })
            }
            Err(Error::HttpStatus { status, body }) => {
                return Err(PaginationError::Upstream {
                    message: if body.is_empty() {
                        "upstream returned an error status".to_string()
                    } else {
                        body
                    },
                    code: Some(i64::from(status)),
                })
            }
            Err(e) => return Err(PaginationError::Transport(e)),
        };

        if let Some(error) = envelope.error {
            let message = error
                .message
                .unwrap_or_else(|| "upstream reported an error without a message".to_string());
            tracing::error!("Upstream reported an error: {}", message);
            return Err(PaginationError::Upstream {
                message,
                code: error.code,
            });
        }
        let (messages, pagination) = match (envelope.messages, envelope.pagination) {
            (Some(messages), Some(pagination)) => (messages, pagination),
            _ => {
                return Err(PaginationError::Upstream {
                    message: "upstream response was missing its messages or pagination envelope"
                        .to_string(),
                    code: None,
                })
            }
        };

        // Cursors inherit the pagination the upstream says it applied, not
        // the request parameters.
        let base = CursorState::from_page_info(&pagination);
        let edges = messages
            .into_iter()
            .enumerate()
            .map(|(i, node)| Edge {
                cursor: base.advance_past(i).encode(),
                node,
            })
            .collect();

        Ok(MessageConnection {
            edges,
            total: pagination.total,
        })
    }
}
