use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Page size shared by every listing endpoint.
pub const PAGINATE_BY: i64 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Page is not 'last', nor can it be converted to an int.")]
    NotAnInteger,
    #[error("Invalid page ({0}): That page contains no results")]
    OutOfRange(i64),
}

/// Splits a counted collection into fixed-size pages.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    count: i64,
    per_page: i64,
}

impl Paginator {
    pub fn new(count: i64, per_page: i64) -> Self {
        Self {
            count: count.max(0),
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// An empty collection still has one (empty) page.
    pub fn num_pages(&self) -> i64 {
        if self.count == 0 {
            1
        } else {
            (self.count + self.per_page - 1) / self.per_page
        }
    }

    /// Resolves the raw `page` query value. Missing or empty means the first page.
    pub fn page(&self, raw: Option<&str>) -> Result<Page, PageError> {
        let number = match raw.filter(|value| !value.is_empty()) {
            None => 1,
            Some("last") => self.num_pages(),
            Some(value) => value.parse::<i64>().map_err(|_| PageError::NotAnInteger)?,
        };

        if number < 1 || number > self.num_pages() {
            return Err(PageError::OutOfRange(number));
        }

        Ok(Page {
            number,
            num_pages: self.num_pages(),
            count: self.count,
            per_page: self.per_page,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Page {
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
}

impl Page {
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    /// 1-based index of the first item on this page, 0 when empty.
    pub fn start_index(&self) -> i64 {
        if self.count == 0 { 0 } else { self.offset() + 1 }
    }

    pub fn end_index(&self) -> i64 {
        (self.offset() + self.per_page).min(self.count)
    }
}

#[derive(serde::Serialize)]
struct PageObj {
    number: i64,
    num_pages: i64,
    count: i64,
    per_page: i64,
    has_next: bool,
    has_previous: bool,
    start_index: i64,
    end_index: i64,
}

impl From<&Page> for PageObj {
    fn from(page: &Page) -> Self {
        Self {
            number: page.number,
            num_pages: page.num_pages,
            count: page.count,
            per_page: page.per_page,
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            start_index: page.start_index(),
            end_index: page.end_index(),
        }
    }
}

/// Context of a listing response: the page's objects under
/// `<entity>_list`, `is_paginated`, `page_obj` and the bound `search_form`.
pub struct ListContext<T, F> {
    pub context_object_name: &'static str,
    pub object_list: Vec<T>,
    pub page: Page,
    pub search_form: F,
}

impl<T, F> ListContext<T, F> {
    pub fn is_paginated(&self) -> bool {
        self.page.has_other_pages()
    }
}

impl<T: Serialize, F: Serialize> Serialize for ListContext<T, F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry(self.context_object_name, &self.object_list)?;
        map.serialize_entry("is_paginated", &self.is_paginated())?;
        map.serialize_entry("page_obj", &PageObj::from(&self.page))?;
        map.serialize_entry("search_form", &self.search_form)?;
        map.end()
    }
}
