//! The cursor codec: pagination state to and from opaque tokens.
//!
//! A cursor carries the complete state needed to resume a paged fetch —
//! page size, position, ordering, and the filters active when it was minted.
//! Consumers treat the token as opaque; only this module reads or writes it.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use mediagraph_api::types::{PageInfo, Sort};
use mediagraph_api::MessageQuery;

/// Decoded contents of a pagination cursor.
///
/// `filter` is a `BTreeMap` so the serialized form is canonical: encoding
/// the same state always yields the same token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub limit: i64,
    pub offset: i64,
    pub order_by: String,
    pub sort: Sort,
    pub filter: BTreeMap<String, String>,
}

/// Reasons a string failed to decode into a [`CursorState`].
#[derive(thiserror::Error, Debug)]
pub enum CursorError {
    /// The cursor string was empty.
    #[error("cursor is empty")]
    Empty,
    /// The cursor was not valid base64.
    #[error("cursor is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded payload was not a pagination state.
    #[error("cursor payload is not a pagination state: {0}")]
    State(#[from] serde_json::Error),
    /// A field decoded but was out of range.
    #[error("cursor field out of range: {0}")]
    Range(&'static str),
}

impl CursorState {
    /// Builds the base state for a page from the upstream's own pagination
    /// envelope. The upstream is authoritative about what it applied, so
    /// cursors are minted from this rather than from request parameters.
    pub fn from_page_info(info: &PageInfo) -> Self {
        Self {
            limit: info.limit,
            offset: info.offset,
            order_by: info.order_by.clone(),
            sort: info.sort,
            filter: info.filter.clone(),
        }
    }

    /// State positioned immediately after the record at `index` within the
    /// page this state describes.
    pub fn advance_past(&self, index: usize) -> Self {
        Self {
            offset: self.offset + index as i64 + 1,
            ..self.clone()
        }
    }

    /// Upstream request parameters resuming pagination from this state.
    pub fn into_query(self) -> MessageQuery {
        MessageQuery {
            limit: Some(self.limit),
            offset: Some(self.offset),
            order_by: Some(self.order_by),
            sort: Some(self.sort),
            filter: self.filter,
        }
    }

    /// Serializes this state into an opaque, transportable token.
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).expect("state with string keys serializes to JSON");
        STANDARD.encode(json)
    }

    /// Parses a token produced by [`CursorState::encode`].
    ///
    /// Anything else — empty input, foreign or tampered tokens, states with
    /// out-of-range fields — yields a [`CursorError`]; a bad token can never
    /// pass as a valid state.
    pub fn decode(raw: &str) -> Result<Self, CursorError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CursorError::Empty);
        }
        let bytes = STANDARD.decode(raw)?;
        let state: CursorState = serde_json::from_slice(&bytes)?;
        if state.limit < 1 {
            return Err(CursorError::Range("limit must be positive"));
        }
        if state.offset < 0 {
            return Err(CursorError::Range("offset must be non-negative"));
        }
        Ok(state)
    }
}
