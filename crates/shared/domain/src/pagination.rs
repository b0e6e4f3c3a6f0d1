//! Paginated list responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Paginated response wrapper as returned by list endpoints.
///
/// Deserializes from the flat `{data, total, page, limit, total_pages}` shape,
/// from `{data, pagination: {...}}`, from the `{bookings|users|sessions|slots,
/// count}` listings and from a bare JSON array. An object without a known
/// collection key is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPage<T>")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, limit: u64, total: u64) -> Self {
        let total_pages = if limit > 0 { total.div_ceil(limit) } else { 0 };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 1, 0, 0)
    }
}

#[derive(Deserialize)]
struct PageMeta {
    #[serde(default)]
    page: Option<u64>,
    #[serde(default)]
    limit: Option<u64>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default, alias = "totalPages")]
    total_pages: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
enum RawPage<T> {
    List(Vec<T>),
    Page {
        #[serde(
            alias = "bookings",
            alias = "users",
            alias = "sessions",
            alias = "slots",
            deserialize_with = "nullable_list"
        )]
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<PageMeta>,
        #[serde(default)]
        page: Option<u64>,
        #[serde(default)]
        limit: Option<u64>,
        #[serde(default, alias = "count")]
        total: Option<u64>,
        #[serde(default, alias = "totalPages")]
        total_pages: Option<u64>,
    },
}

/// Required list field; a JSON `null` (an empty Go slice) reads as empty
fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl<T> From<RawPage<T>> for Paginated<T> {
    fn from(raw: RawPage<T>) -> Self {
        match raw {
            RawPage::List(data) => {
                let len = data.len() as u64;
                Paginated::new(data, 1, len, len)
            }
            RawPage::Page {
                data,
                pagination,
                page,
                limit,
                total,
                total_pages,
            } => {
                let meta = pagination.unwrap_or(PageMeta {
                    page,
                    limit,
                    total,
                    total_pages,
                });
                let len = data.len() as u64;
                let mut page = Paginated::new(
                    data,
                    meta.page.unwrap_or(1),
                    meta.limit.unwrap_or(len),
                    meta.total.unwrap_or(len),
                );
                if let Some(total_pages) = meta.total_pages {
                    page.total_pages = total_pages;
                }
                page
            }
        }
    }
}
