//! Category filtering and pagination of the product listing.

use serde::Serialize;

use crate::product::Product;

/// Paging metadata for a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagingInfo {
    pub current_page: u32,
    pub items_per_page: u32,
    pub total_items: u32,
}

impl PagingInfo {
    /// Number of pages needed to show every item.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        if self.items_per_page == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Whether a page follows the current one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Whether a page precedes the current one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub paging: PagingInfo,
    /// The category filter the page was computed with.
    pub current_category: Option<String>,
}

/// Compute one page of the catalog.
///
/// Products are filtered to `category` when one is given, ordered by ID, and
/// sliced into pages of `page_size`. `page_number` is 1-based; a page past the
/// end yields no products but the paging info still describes the filtered
/// set.
#[must_use]
pub fn query(
    products: &[Product],
    category: Option<&str>,
    page_number: u32,
    page_size: u32,
) -> ProductPage {
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();
    filtered.sort_by_key(|p| p.id);

    let total_items = u32::try_from(filtered.len()).unwrap_or(u32::MAX);
    let skip = usize::try_from(u64::from(page_number.saturating_sub(1)) * u64::from(page_size))
        .unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);

    ProductPage {
        products: filtered.into_iter().skip(skip).take(take).cloned().collect(),
        paging: PagingInfo {
            current_page: page_number,
            items_per_page: page_size,
            total_items,
        },
        current_category: category.map(str::to_owned),
    }
}

/// Distinct category labels in ascending order, for the navigation menu.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{Price, ProductId};

    fn product(id: i32, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("P{id}"),
            description: String::new(),
            price: Price::new(Decimal::from(id)).unwrap(),
            category: category.to_owned(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Cat1"),
            product(2, "Cat2"),
            product(3, "Cat1"),
            product(4, "Cat2"),
            product(5, "Cat3"),
        ]
    }

    fn names(page: &ProductPage) -> Vec<&str> {
        page.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_can_paginate() {
        let page = query(&sample(), None, 2, 3);
        assert_eq!(names(&page), ["P4", "P5"]);
    }

    #[test]
    fn test_paging_info() {
        let page = query(&sample(), None, 2, 3);
        assert_eq!(page.paging.current_page, 2);
        assert_eq!(page.paging.items_per_page, 3);
        assert_eq!(page.paging.total_items, 5);
        assert_eq!(page.paging.total_pages(), 2);
        assert!(!page.paging.has_next_page());
        assert!(page.paging.has_previous_page());
    }

    #[test]
    fn test_can_filter_by_category() {
        let page = query(&sample(), Some("Cat2"), 1, 3);
        assert_eq!(names(&page), ["P2", "P4"]);
        assert!(page.products.iter().all(|p| p.category == "Cat2"));
        assert_eq!(page.paging.total_items, 2);
        assert_eq!(page.paging.total_pages(), 1);
        assert_eq!(page.current_category.as_deref(), Some("Cat2"));
    }

    #[test]
    fn test_category_specific_counts() {
        let products = sample();
        let count = |c: Option<&str>| query(&products, c, 1, 3).paging.total_items;
        assert_eq!(count(Some("Cat1")), 2);
        assert_eq!(count(Some("Cat2")), 2);
        assert_eq!(count(Some("Cat3")), 1);
        assert_eq!(count(None), 5);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let page = query(&sample(), Some("Nope"), 1, 3);
        assert!(page.products.is_empty());
        assert_eq!(page.paging.total_items, 0);
        assert_eq!(page.paging.total_pages(), 0);
    }

    #[test]
    fn test_page_past_end_keeps_paging_info() {
        let page = query(&sample(), Some("Cat1"), 7, 3);
        assert!(page.products.is_empty());
        assert_eq!(page.paging.current_page, 7);
        assert_eq!(page.paging.total_items, 2);
        assert_eq!(page.paging.total_pages(), 1);
    }

    #[test]
    fn test_orders_by_id_regardless_of_input_order() {
        let mut products = sample();
        products.reverse();
        let page = query(&products, None, 1, 10);
        let ids: Vec<i32> = page.products.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let products: Vec<Product> = (1..=23)
            .rev()
            .map(|id| product(id, if id % 3 == 0 { "Balls" } else { "Boats" }))
            .collect();

        for category in [None, Some("Balls"), Some("Boats")] {
            for page_size in 1..=25 {
                let first = query(&products, category, 1, page_size);
                let total_pages = first.paging.total_pages();

                let mut seen = Vec::new();
                for page_number in 1..=total_pages {
                    let page = query(&products, category, page_number, page_size);
                    assert!(page.products.len() <= page_size as usize);
                    seen.extend(page.products.iter().map(|p| p.id));
                }

                assert_eq!(seen.len(), first.paging.total_items as usize);
                assert!(seen.windows(2).all(|w| w[0] < w[1]), "pages must not overlap");
                assert_eq!(
                    total_pages,
                    first.paging.total_items.div_ceil(page_size),
                    "total pages is ceil(items / page size)"
                );
            }
        }
    }

    #[test]
    fn test_can_select_categories() {
        let mut products = sample();
        products.push(product(6, "Cat1"));
        assert_eq!(categories(&products), ["Cat1", "Cat2", "Cat3"]);
    }
}
