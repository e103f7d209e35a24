//! Listing query parameters and the shared paginated response envelope.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::listing::{ListRequest, PageMeta};

/// Listing query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers;
/// a non-numeric or negative value is rejected at extraction time.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,

    #[serde(default)]
    pub sort: Option<String>,

    #[serde(default)]
    pub search: Option<String>,
}

impl From<ListParams> for ListRequest {
    fn from(params: ListParams) -> Self {
        ListRequest {
            page_number: params.page_number,
            page_size: params.page_size,
            sort: params.sort,
            search: params.search,
        }
    }
}

/// One page of records plus its pagination metadata.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub count: usize,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(meta: PageMeta, data: Vec<T>) -> Self {
        Self {
            page_number: meta.page_number,
            page_size: meta.page_size,
            count: meta.count,
            total_pages: meta.total_pages,
            has_previous_page: meta.has_previous_page,
            has_next_page: meta.has_next_page,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_params_parse_from_strings() {
        let json = r#"{"page_number": "2", "page_size": "10"}"#;
        let params: ListParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.page_number, Some(2));
        assert_eq!(params.page_size, Some(10));
    }

    #[test]
    fn test_all_params_optional() {
        let params: ListParams = serde_json::from_str("{}").unwrap();

        assert!(params.page_number.is_none());
        assert!(params.page_size.is_none());
        assert!(params.sort.is_none());
        assert!(params.search.is_none());
    }

    #[test]
    fn test_non_integer_page_rejected() {
        let json = r#"{"page_number": "two"}"#;
        assert!(serde_json::from_str::<ListParams>(json).is_err());

        let json = r#"{"page_size": "-1"}"#;
        assert!(serde_json::from_str::<ListParams>(json).is_err());
    }

    #[test]
    fn test_response_envelope_carries_meta() {
        let meta = PageMeta {
            page_number: 2,
            page_size: 10,
            count: 3,
            total_pages: 2,
            has_previous_page: true,
            has_next_page: false,
        };

        let response = ListResponse::new(meta, vec!["a", "b", "c"]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["page_number"], 2);
        assert_eq!(json["page_size"], 10);
        assert_eq!(json["count"], 3);
        assert_eq!(json["total_pages"], 2);
        assert_eq!(json["has_previous_page"], true);
        assert_eq!(json["has_next_page"], false);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
