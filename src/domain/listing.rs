//! Page/sort/search query building shared by every listing endpoint.
//!
//! One schema instance per resource describes which fields may be sorted and
//! searched; everything else (defaults, page math, validation) is common.
//! Building happens in two phases because the default page size depends on a
//! record count only the repository can provide:
//!
//! 1. [`ListSchema::parse`] validates the raw request and resolves sort and
//!    search against the field whitelist.
//! 2. [`ParsedListRequest::paginate`] takes the matching record count and
//!    produces the final [`ListQuery`] with resolved page bounds.
//!
//! The module is pure: no I/O, no shared state.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("page_number and page_size must be positive integers")]
    NonPositivePage,
    #[error("page_number {page_number} is past the last page ({total_pages})")]
    PageOutOfRange { page_number: u32, total_pages: u32 },
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("unknown sort direction `{0}`, expected `asc` or `desc`")]
    UnknownDirection(String),
    #[error("search must have the form `field:pattern`")]
    MalformedSearch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A resolved sort key. The field is always one of the schema's whitelisted
/// names, never raw request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// A resolved case-insensitive substring filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub field: &'static str,
    pub pattern: String,
}

/// Raw listing parameters as they arrive from the query string.
#[derive(Debug, Default, Clone)]
pub struct ListRequest {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// Per-resource listing description: sortable/searchable fields and the
/// default sort key.
#[derive(Debug, Clone, Copy)]
pub struct ListSchema {
    pub fields: &'static [&'static str],
    pub default_sort_field: &'static str,
}

/// Listing schema for the product catalog.
pub const PRODUCT_LISTING: ListSchema = ListSchema {
    fields: &["name", "category", "price", "stock", "unit", "description"],
    default_sort_field: "name",
};

/// Listing schema for order history.
pub const ORDER_LISTING: ListSchema = ListSchema {
    fields: &["product_name", "category", "price", "quantity"],
    default_sort_field: "product_name",
};

/// Listing schema for user accounts.
pub const USER_LISTING: ListSchema = ListSchema {
    fields: &["name", "email"],
    default_sort_field: "email",
};

/// Output of the first build phase: validated input, pagination still
/// unresolved because it needs the matching record count.
#[derive(Debug, Clone)]
pub struct ParsedListRequest {
    page_number: Option<u32>,
    page_size: Option<u32>,
    sort: Sort,
    filter: Option<SearchFilter>,
}

/// A fully resolved listing query ready to run against the store.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub sort: Sort,
    pub filter: Option<SearchFilter>,
}

/// Pagination metadata returned alongside every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub page_number: u32,
    pub page_size: u32,
    pub count: usize,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl ListSchema {
    /// Validates the raw request against this schema.
    ///
    /// Sort defaults to the schema's default field ascending. Search is
    /// independently optional; its presence never depends on the sort
    /// syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NonPositivePage`] when an explicit page number
    /// or page size is zero, and field/direction errors for tokens outside
    /// the whitelist.
    pub fn parse(&self, request: &ListRequest) -> Result<ParsedListRequest, ListError> {
        if request.page_number == Some(0) || request.page_size == Some(0) {
            return Err(ListError::NonPositivePage);
        }

        let sort = match &request.sort {
            Some(raw) => self.parse_sort(raw)?,
            None => Sort {
                field: self.default_sort_field,
                direction: SortDirection::Ascending,
            },
        };

        let filter = match &request.search {
            Some(raw) => Some(self.parse_search(raw)?),
            None => None,
        };

        Ok(ParsedListRequest {
            page_number: request.page_number,
            page_size: request.page_size,
            sort,
            filter,
        })
    }

    /// Resolves a `field` or `field:direction` sort token.
    fn parse_sort(&self, raw: &str) -> Result<Sort, ListError> {
        let (field, direction) = match raw.split_once(':') {
            Some((field, token)) => (field, parse_direction(token)?),
            None => (raw, SortDirection::Ascending),
        };

        Ok(Sort {
            field: self.resolve_field(field)?,
            direction,
        })
    }

    /// Resolves a `field:pattern` search token. The pattern may itself
    /// contain colons; only the first one separates the field.
    fn parse_search(&self, raw: &str) -> Result<SearchFilter, ListError> {
        let (field, pattern) = raw.split_once(':').ok_or(ListError::MalformedSearch)?;

        Ok(SearchFilter {
            field: self.resolve_field(field)?,
            pattern: pattern.to_string(),
        })
    }

    fn resolve_field(&self, name: &str) -> Result<&'static str, ListError> {
        self.fields
            .iter()
            .find(|field| **field == name)
            .copied()
            .ok_or_else(|| ListError::UnknownField(name.to_string()))
    }
}

impl ParsedListRequest {
    /// The resolved search filter, available before pagination so the
    /// caller can count matching records.
    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    /// Resolves pagination against the matching record count.
    ///
    /// Page size defaults to the full count (unpaginated); page number
    /// defaults to 1. Page 1 of an empty collection is an empty page, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::PageOutOfRange`] when the page number is past
    /// the last page.
    pub fn paginate(self, total: i64) -> Result<ListQuery, ListError> {
        let page_number = self.page_number.unwrap_or(1);
        let page_size = match self.page_size {
            Some(size) => size,
            None => u32::try_from(total.max(1)).unwrap_or(u32::MAX),
        };

        let total_pages = total_pages(total, page_size);
        if page_number > total_pages.max(1) {
            return Err(ListError::PageOutOfRange {
                page_number,
                total_pages,
            });
        }

        Ok(ListQuery {
            page_number,
            page_size,
            total_pages,
            sort: self.sort,
            filter: self.filter,
        })
    }
}

impl ListQuery {
    pub fn offset(&self) -> i64 {
        (i64::from(self.page_number) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Builds the metadata for a returned page of `count` records.
    pub fn meta(&self, count: usize) -> PageMeta {
        PageMeta {
            page_number: self.page_number,
            page_size: self.page_size,
            count,
            total_pages: self.total_pages,
            has_previous_page: self.page_number != 1,
            has_next_page: self.total_pages != 0 && self.page_number != self.total_pages,
        }
    }
}

/// `ceil(total / page_size)`; zero for an empty collection.
fn total_pages(total: i64, page_size: u32) -> u32 {
    if total <= 0 {
        return 0;
    }

    let total = total as u64;
    let page_size = u64::from(page_size);
    u32::try_from(total.div_ceil(page_size)).unwrap_or(u32::MAX)
}

fn parse_direction(token: &str) -> Result<SortDirection, ListError> {
    if token.eq_ignore_ascii_case("asc") {
        Ok(SortDirection::Ascending)
    } else if token.eq_ignore_ascii_case("desc") {
        Ok(SortDirection::Descending)
    } else {
        Err(ListError::UnknownDirection(token.to_string()))
    }
}
