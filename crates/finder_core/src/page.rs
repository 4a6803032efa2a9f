/// Posts shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `count` items; zero items means zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Items on the 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(12), 3);
    }

    #[test]
    fn slice_clamps_to_available_items() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(page_slice(&items, 1), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&items, 3), &[11, 12]);
        assert!(page_slice(&items, 4).is_empty());
        assert!(page_slice(&items, 0).is_empty());
    }
}
