//! Pure in-memory filtering and sorting over the catalog.
//!
//! A query is either a basic search (free text + category, the storefront's
//! default surface) or an advanced filter; the two are mutually exclusive by
//! construction, so activating one cannot leave the other half-applied.

use rust_decimal::Decimal;

use vitrina_core::{Category, Product};

/// Sort order for query results.
///
/// Lexicographic comparisons are plain byte-wise string ordering; products
/// without a brand sort as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Name,
    PriceLowToHigh,
    PriceHighToLow,
    Brand,
}

/// Independently combinable advanced filter criteria. Every field is
/// optional; an empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring match against name, description, or brand.
    pub search_term: Option<String>,
    /// Exact category.
    pub category: Option<Category>,
    /// Exact brand.
    pub brand: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// Required stock status.
    pub in_stock: Option<bool>,
    /// Required featured status.
    pub featured: Option<bool>,
    /// Minimum average rating; products without a rating fail any positive
    /// floor.
    pub min_rating: Option<Decimal>,
}

impl ProductFilter {
    /// Whether a product satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(term) = &self.search_term
            && !text_match(product, term)
        {
            return false;
        }
        if let Some(category) = self.category
            && product.category != category
        {
            return false;
        }
        if let Some(brand) = &self.brand
            && product.brand_str() != brand
        {
            return false;
        }
        if let Some(min) = self.min_price
            && product.price.amount() < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price.amount() > max
        {
            return false;
        }
        if let Some(in_stock) = self.in_stock
            && product.in_stock != in_stock
        {
            return false;
        }
        if let Some(featured) = self.featured
            && product.featured != featured
        {
            return false;
        }
        if let Some(floor) = self.min_rating
            && floor > Decimal::ZERO
            && product.rating.unwrap_or(Decimal::ZERO) < floor
        {
            return false;
        }
        true
    }
}

/// Basic search vs. advanced filter, one at a time.
#[derive(Debug, Clone)]
pub enum QueryMode {
    /// Free-text search plus an optional category, the default surface.
    Basic {
        search_term: Option<String>,
        category: Option<Category>,
    },
    /// The full advanced filter.
    Advanced(ProductFilter),
}

impl Default for QueryMode {
    fn default() -> Self {
        Self::Basic {
            search_term: None,
            category: None,
        }
    }
}

/// A complete catalog query.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub mode: QueryMode,
    pub sort: SortBy,
}

impl ProductQuery {
    /// A basic search query with the default sort.
    #[must_use]
    pub fn basic(search_term: Option<String>, category: Option<Category>) -> Self {
        Self {
            mode: QueryMode::Basic {
                search_term,
                category,
            },
            sort: SortBy::default(),
        }
    }

    /// An advanced filter query with the default sort.
    #[must_use]
    pub fn advanced(filter: ProductFilter) -> Self {
        Self {
            mode: QueryMode::Advanced(filter),
            sort: SortBy::default(),
        }
    }

    /// Same query with a different sort order.
    #[must_use]
    pub fn sorted_by(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }
}

/// Filter and sort the catalog. Pure: the input slice is never mutated.
#[must_use]
pub fn search_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| match &query.mode {
            QueryMode::Basic {
                search_term,
                category,
            } => {
                let term_ok = search_term
                    .as_ref()
                    .is_none_or(|term| text_match(product, term));
                let category_ok = category.is_none_or(|c| product.category == c);
                term_ok && category_ok
            }
            QueryMode::Advanced(filter) => filter.matches(product),
        })
        .cloned()
        .collect();

    match query.sort {
        SortBy::Name => results.sort_unstable_by(|a, b| a.name.cmp(&b.name)),
        SortBy::PriceLowToHigh => results.sort_unstable_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceHighToLow => results.sort_unstable_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Brand => results.sort_unstable_by(|a, b| a.brand_str().cmp(b.brand_str())),
    }

    results
}

/// Case-insensitive substring match against name, description, and brand.
fn text_match(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product
            .brand
            .as_ref()
            .is_some_and(|brand| brand.to_lowercase().contains(&needle))
}
