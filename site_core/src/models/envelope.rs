//! The `{ data, meta }` wrapper every CMS response arrives in

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub page_count: u32,
    pub total: u64,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.meta.as_ref().and_then(|meta| meta.pagination)
    }
}

impl<T> Envelope<Vec<T>> {
    /// First entry of a filtered collection, the way singular lookups resolve.
    pub fn into_first(self) -> Option<T> {
        self.data.into_iter().next()
    }
}
