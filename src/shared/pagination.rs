// src/shared/pagination.rs
//
// Page-number handling for list pages. Page 1 is always valid, even when the
// result set is empty; any other page outside [1, total_pages] is rejected.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.per_page
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl PageMeta {
    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageNumberError {
    #[error("That page number is not an integer")]
    NotAnInteger,

    #[error("That page number is less than 1")]
    LessThanOne,

    #[error("That page contains no results")]
    Empty,
}

pub fn total_pages(total_items: u64, per_page: u64) -> u64 {
    if per_page == 0 || total_items == 0 {
        return 1;
    }
    total_items.div_ceil(per_page)
}

/// Resolve a raw `page` query value against a result count.
///
/// `None` and the empty string mean page 1; `"last"` means the final page.
pub fn resolve_page(
    raw: Option<&str>,
    total_items: u64,
    per_page: u64,
) -> Result<PageMeta, PageNumberError> {
    let total_pages = total_pages(total_items, per_page);

    let page = match raw.map(str::trim) {
        None | Some("") => 1,
        Some("last") => total_pages,
        Some(value) => {
            let number: i64 = value.parse().map_err(|_| PageNumberError::NotAnInteger)?;
            if number < 1 {
                return Err(PageNumberError::LessThanOne);
            }
            number as u64
        }
    };

    if page > total_pages {
        return Err(PageNumberError::Empty);
    }

    Ok(PageMeta {
        page,
        per_page,
        total_items,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
        previous_page: (page > 1).then(|| page - 1),
        next_page: (page < total_pages).then(|| page + 1),
    })
}
