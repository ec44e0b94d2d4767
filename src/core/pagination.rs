use serde::Serialize;

// PageSpec describes which slice of a filtered query the caller wants.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PageSpec {
    // every matching record as a single page
    Unpaged,
    // zero-based page index and page size
    Paged { index: usize, size: usize },
}

impl PageSpec {
    /// Builds a spec from caller-facing page parameters. Page numbers start at 1;
    /// a zero page number or a zero page size asks for everything unpaged.
    pub fn normalize(page_number: u32, page_size: u32) -> Self {
        if page_number == 0 || page_size == 0 {
            PageSpec::Unpaged
        } else {
            PageSpec::Paged {
                index: (page_number - 1) as usize,
                size: page_size as usize,
            }
        }
    }
}

// It defines abstraction for a page of a filtered query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    // records of this page
    pub content: Vec<T>,
    // number of matching records across all pages
    pub total_elements: usize,
    pub total_pages: usize,
    // zero-based
    #[serde(rename = "number")]
    pub page_number: usize,
    #[serde(rename = "size")]
    pub page_size: usize,
    #[serde(rename = "first")]
    pub is_first: bool,
    #[serde(rename = "last")]
    pub is_last: bool,
    pub number_of_elements: usize,
}

impl<T> PageResult<T> {
    /// Slices the complete, ordered set of matching records according to `spec`.
    /// Stores call this once they have collected every match for a filter.
    pub fn from_records(records: Vec<T>, spec: &PageSpec) -> Self {
        let total_elements = records.len();
        match *spec {
            PageSpec::Unpaged => PageResult {
                number_of_elements: total_elements,
                content: records,
                total_elements,
                total_pages: 1,
                page_number: 0,
                page_size: total_elements,
                is_first: true,
                is_last: true,
            },
            PageSpec::Paged { index, size } => {
                let total_pages = if size == 0 {
                    1
                } else {
                    std::cmp::max(1, total_elements.div_ceil(size))
                };
                let content: Vec<T> = records.into_iter()
                    .skip(index.saturating_mul(size))
                    .take(size)
                    .collect();
                PageResult {
                    number_of_elements: content.len(),
                    content,
                    total_elements,
                    total_pages,
                    page_number: index,
                    page_size: size,
                    is_first: index == 0,
                    is_last: index + 1 >= total_pages,
                }
            }
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page_number: self.page_number,
            page_size: self.page_size,
            is_first: self.is_first,
            is_last: self.is_last,
            number_of_elements: self.number_of_elements,
        }
    }
}
