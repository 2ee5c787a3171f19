//! Contact list filtering.

pub mod search_filter;

pub use search_filter::SearchFilter;
