//! Query serialization: the [`Query`] trait and the [`MessageQuery`] builder.

use std::collections::BTreeMap;

use url::Url;

use crate::types::Sort;

/// Trait implemented by query builders. Provides URL serialization for the
/// parameters a request carries.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Parameters accepted by the `/messages` endpoint.
///
/// The upstream does not accept nested-object query encoding for filters;
/// each filter entry is sent as a bracketed `filter[<key>]=<value>` pair.
#[derive(Clone, Debug, Default)]
pub struct MessageQuery {
    /// Maximum number of records per page. `None` uses the API default.
    pub limit: Option<i64>,
    /// Zero-based index of the first record to return.
    pub offset: Option<i64>,
    /// Field to order results by (e.g. `date`).
    pub order_by: Option<String>,
    /// Sort direction.
    pub sort: Option<Sort>,
    /// Filter entries, sent as `filter[<key>]=<value>` pairs.
    pub filter: BTreeMap<String, String>,
}

impl Query for MessageQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }
        if let Some(order_by) = &self.order_by {
            url.query_pairs_mut()
                .append_pair("order_by", order_by.as_str());
        }
        if let Some(sort) = self.sort {
            url.query_pairs_mut()
                .append_pair("sort", sort.to_string().as_str());
        }
        for (key, value) in self.filter.iter() {
            url.query_pairs_mut()
                .append_pair(format!("filter[{}]", key).as_str(), value.as_str());
        }
        url
    }
}

impl MessageQuery {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
    pub fn with_order_by(mut self, order_by: &str) -> Self {
        self.order_by = Some(order_by.to_string());
        self
    }
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
    pub fn with_filter(mut self, key: &str, value: &str) -> Self {
        self.filter.insert(key.to_string(), value.to_string());
        self
    }
    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filter.extend(filters);
        self
    }
}
