//! Query parameters, list pipeline and pagination utilities

use crate::core::entity::Listable;
use crate::core::error::{ApiResult, ValidationError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Query parameters accepted by every list endpoint
///
/// Anything that is not `page`, `search` or `ordering` is collected into
/// `filters` and matched against the resource's filter allow-list.
///
/// # Example
/// ```text
/// GET /api/equipos?tipo=MAQ&activo=true
/// GET /api/ordenes?search=bomba&ordering=-prioridad,fecha_programada&page=2
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ListParams {
    /// Page number (starts at 1, `last` is accepted)
    pub page: Option<String>,

    /// Whitespace-separated terms; every term must match some search field
    pub search: Option<String>,

    /// Comma-separated field names, `-` prefix for descending
    pub ordering: Option<String>,

    /// Exact-match filters
    #[serde(flatten)]
    pub filters: HashMap<String, String>,
}

/// Per-resource allow-lists for the list pipeline
#[derive(Debug, Clone, Copy)]
pub struct ListSpec {
    pub filters: &'static [&'static str],
    pub search: &'static [&'static str],
    pub ordering: &'static [&'static str],
    /// Applied when the request names no allowed ordering field
    pub default_ordering: &'static [&'static str],
}

impl ListSpec {
    /// Resolve the requested ordering against the allow-list
    pub fn sort_keys(&self, requested: Option<&str>) -> Vec<(&'static str, bool)> {
        let keys: Vec<(&'static str, bool)> = requested
            .unwrap_or_default()
            .split(',')
            .filter_map(|term| {
                let term = term.trim();
                let (name, descending) = match term.strip_prefix('-') {
                    Some(rest) => (rest, true),
                    None => (term, false),
                };
                self.ordering
                    .iter()
                    .find(|allowed| **allowed == name)
                    .map(|allowed| (*allowed, descending))
            })
            .collect();

        if keys.is_empty() {
            self.default_ordering
                .iter()
                .copied()
                .map(|field| match field.strip_prefix('-') {
                    Some(rest) => (rest, true),
                    None => (field, false),
                })
                .collect()
        } else {
            keys
        }
    }

    /// Run filter, search, ordering and pagination over a full result set
    pub fn apply<T: Listable>(
        &self,
        items: Vec<T>,
        params: &ListParams,
        page_size: usize,
    ) -> ApiResult<PaginatedResponse<T>> {
        let mut items = self.filter(items, params)?;
        self.search_terms(&mut items, params.search.as_deref());
        self.sort(&mut items, params.ordering.as_deref());
        paginate(items, params.page.as_deref(), page_size)
    }

    fn filter<T: Listable>(&self, items: Vec<T>, params: &ListParams) -> ApiResult<Vec<T>> {
        let mut active: Vec<(&str, &str)> = params
            .filters
            .iter()
            .filter(|(key, value)| {
                !value.is_empty() && self.filters.iter().any(|allowed| *allowed == key.as_str())
            })
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        active.sort();

        let mut kept = Vec::with_capacity(items.len());
        for item in items {
            let mut keep = true;
            for (field, raw) in &active {
                let value = item.field_value(field).unwrap_or(crate::core::FieldValue::Null);
                match value.matches_query(raw) {
                    Some(true) => {}
                    Some(false) => keep = false,
                    None => {
                        return Err(ValidationError::InvalidFilter {
                            field: field.to_string(),
                            value: raw.to_string(),
                        }
                        .into());
                    }
                }
            }
            if keep {
                kept.push(item);
            }
        }
        Ok(kept)
    }

    fn search_terms<T: Listable>(&self, items: &mut Vec<T>, search: Option<&str>) {
        let Some(search) = search else {
            return;
        };
        let terms: Vec<&str> = search
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return;
        }

        items.retain(|item| {
            terms.iter().all(|term| {
                self.search.iter().any(|field| {
                    item.field_value(field)
                        .is_some_and(|value| value.contains_text(term))
                })
            })
        });
    }

    fn sort<T: Listable>(&self, items: &mut [T], ordering: Option<&str>) {
        let keys = self.sort_keys(ordering);
        items.sort_by(|a, b| {
            for (field, descending) in &keys {
                let left = a.field_value(field).unwrap_or(crate::core::FieldValue::Null);
                let right = b.field_value(field).unwrap_or(crate::core::FieldValue::Null);
                let ord = left.compare(&right);
                let ord = if *descending { ord.reverse() } else { ord };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            a.row_id().cmp(&b.row_id())
        });
    }
}

/// Slice one page out of an already ordered result set
pub fn paginate<T>(
    items: Vec<T>,
    page: Option<&str>,
    page_size: usize,
) -> ApiResult<PaginatedResponse<T>> {
    let limit = page_size.max(1);
    let total = items.len();
    let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };

    let page = match page.map(str::trim) {
        None | Some("") => 1,
        Some("last") => total_pages.max(1),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                return Err(ValidationError::InvalidPage {
                    page: raw.to_string(),
                }
                .into());
            }
        },
    };

    // An empty collection still has a (blank) first page
    if page > total_pages.max(1) {
        return Err(ValidationError::InvalidPage {
            page: page.to_string(),
        }
        .into());
    }

    let start = (page - 1) * limit;
    let data: Vec<T> = items.into_iter().skip(start).take(limit).collect();

    Ok(PaginatedResponse {
        data,
        pagination: PaginationMeta::new(page, limit, total),
    })
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, PartialEq)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
