//! Storage layer tests

mod test_raw_pages;
