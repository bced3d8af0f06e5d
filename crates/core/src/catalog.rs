//! Catalog pagination math and product image-list handling.
//!
//! Product images are stored as a JSONB array of filename strings. The
//! helpers here convert between the stored column value and the ordered
//! `Vec<String>` the API exposes, and compute the orphan set that the asset
//! store must collect after a product mutation.

use serde_json::Value;

/// Fixed page size for product listing.
pub const PAGE_SIZE: i64 = 10;

/// Number of pages needed to show `total` items at `page_size` per page.
///
/// Zero items yield zero pages; a page request beyond the last page returns
/// an empty data array at the query layer, not an error.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + page_size - 1) / page_size
}

/// Row offset for a 1-based page number. Pages below 1 clamp to page 1.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1) * page_size
}

/// Filenames present in `previous` but absent from `current`.
///
/// These are the orphaned uploads eligible for best-effort deletion after a
/// product update or delete. Order follows `previous`.
pub fn orphaned_images(previous: &[String], current: &[String]) -> Vec<String> {
    previous
        .iter()
        .filter(|image| !current.contains(image))
        .cloned()
        .collect()
}

/// Decode the stored `images` column into an ordered list of filenames.
///
/// A NULL column, a non-array value, or non-string entries all decode
/// leniently: absent data is an empty list, malformed entries are skipped.
pub fn images_from_value(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Encode an image filename list for the JSONB `images` column.
pub fn images_to_value(images: &[String]) -> Value {
    Value::Array(images.iter().cloned().map(Value::String).collect())
}
