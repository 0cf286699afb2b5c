use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Populate directive that expands every first-level relation.
pub const POPULATE_ALL: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contains,
    ContainsI,
    StartsWith,
    EndsWith,
    Null,
    NotNull,
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            FilterOperator::Eq => "$eq",
            FilterOperator::Ne => "$ne",
            FilterOperator::Lt => "$lt",
            FilterOperator::Lte => "$lte",
            FilterOperator::Gt => "$gt",
            FilterOperator::Gte => "$gte",
            FilterOperator::In => "$in",
            FilterOperator::Contains => "$contains",
            FilterOperator::ContainsI => "$containsi",
            FilterOperator::StartsWith => "$startsWith",
            FilterOperator::EndsWith => "$endsWith",
            FilterOperator::Null => "$null",
            FilterOperator::NotNull => "$notNull",
        };
        f.write_str(op)
    }
}

impl FromStr for FilterOperator {
    type Err = String;

    /// Accepts operators with or without the `$` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim_start_matches('$') {
            "eq" => FilterOperator::Eq,
            "ne" => FilterOperator::Ne,
            "lt" => FilterOperator::Lt,
            "lte" => FilterOperator::Lte,
            "gt" => FilterOperator::Gt,
            "gte" => FilterOperator::Gte,
            "in" => FilterOperator::In,
            "contains" => FilterOperator::Contains,
            "containsi" => FilterOperator::ContainsI,
            "startsWith" => FilterOperator::StartsWith,
            "endsWith" => FilterOperator::EndsWith,
            "null" => FilterOperator::Null,
            "notNull" => FilterOperator::NotNull,
            other => return Err(format!("Unknown filter operator: {}", other)),
        };
        Ok(op)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl Filter {
    pub fn param_name(&self) -> String {
        format!("filters[{}][{}]", self.field, self.operator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Published,
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationStatus::Draft => write!(f, "draft"),
            PublicationStatus::Published => write!(f, "published"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// A logical CMS query: expansion, filters, sort, pagination and status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentQuery {
    pub populate: Option<String>,
    pub filters: Vec<Filter>,
    pub sort: Vec<String>,
    pub pagination: Option<PageRequest>,
    pub status: Option<PublicationStatus>,
}

impl ContentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_populate(mut self, populate: impl Into<String>) -> Self {
        self.populate = Some(populate.into());
        self
    }

    pub fn populate_all(self) -> Self {
        self.with_populate(POPULATE_ALL)
    }

    pub fn with_filter(
        mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            operator,
            value: value.into(),
        });
        self
    }

    pub fn with_eq(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_filter(field, FilterOperator::Eq, value)
    }

    /// Replaces any sort keys with a single one.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = vec![sort.into()];
        self
    }

    pub fn with_multiple_sort<I, S>(mut self, sort: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = sort.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    pub fn with_pagination(mut self, page: u32, page_size: u32) -> Self {
        self.pagination = Some(PageRequest {
            page: Some(page),
            page_size: Some(page_size),
        });
        self
    }

    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Query parameters in emission order, not yet url-encoded.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(populate) = &self.populate {
            pairs.push(("populate".to_string(), populate.clone()));
        }

        for filter in &self.filters {
            pairs.push((filter.param_name(), filter.value.clone()));
        }

        for (index, sort) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{}]", index), sort.clone()));
        }

        if let Some(pagination) = &self.pagination {
            // zero means "not set", matching the CMS defaults
            if let Some(page) = pagination.page.filter(|p| *p > 0) {
                pairs.push(("pagination[page]".to_string(), page.to_string()));
            }
            if let Some(page_size) = pagination.page_size.filter(|s| *s > 0) {
                pairs.push(("pagination[pageSize]".to_string(), page_size.to_string()));
            }
        }

        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.to_string()));
        }

        pairs
    }
}
