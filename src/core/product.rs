//! Product reader - the product feed, per-sub-category listings, detail, search and the
//! home page "random" selection.
//!
//! Every function filters out inactive products and returns fully enriched rows
//! (see [`crate::core::enrichment`]).

use crate::{
    core::enrichment::{ProductDetails, enrich_product, enrich_products},
    entities::{Product, product},
    errors::Result,
};
use rand::Rng;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect, Select, prelude::*};
use tracing::{debug, instrument};

/// Result cap for [`search_products`] when the caller gives none
pub const DEFAULT_SEARCH_LIMIT: u64 = 20;
/// Window size for [`get_random_products`] when the caller gives none
pub const DEFAULT_RANDOM_LIMIT: u64 = 10;

fn active_products() -> Select<Product> {
    Product::find().filter(product::Column::IsActive.eq(true))
}

/// Retrieves active products, newest first, optionally capped at `limit`.
#[instrument(skip(db))]
pub async fn get_products(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<ProductDetails>> {
    let products = active_products()
        .order_by_desc(product::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;
    enrich_products(db, products).await
}

/// Retrieves the active products of one sub-category, ordered by name.
#[instrument(skip(db))]
pub async fn get_products_by_sub_category(
    db: &DatabaseConnection,
    sub_category_id: i32,
    limit: Option<u64>,
) -> Result<Vec<ProductDetails>> {
    let products = active_products()
        .filter(product::Column::SubCategoryId.eq(sub_category_id))
        .order_by_asc(product::Column::Name)
        .limit(limit)
        .all(db)
        .await?;
    enrich_products(db, products).await
}

/// Finds one active product by id.
///
/// Returns `None` if the product does not exist or is inactive.
#[instrument(skip(db))]
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<Option<ProductDetails>> {
    match active_products()
        .filter(product::Column::Id.eq(product_id))
        .one(db)
        .await?
    {
        Some(product) => Ok(Some(enrich_product(db, product).await?)),
        None => Ok(None),
    }
}

/// Unicode-aware, literal substring test (`%` and `_` have no special meaning).
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive substring search over product name and description, ordered by name.
///
/// Matching folds case on both sides in Rust, so non-ASCII letters match regardless of case
/// (`SQLite`'s `LOWER` only folds ASCII). Only `id, name, description` are scanned; the full
/// rows are then loaded for the matches that fit in `limit`.
///
/// The query is used as given; callers trim it and skip the call when it is empty.
#[instrument(skip(db))]
pub async fn search_products(
    db: &DatabaseConnection,
    query: &str,
    limit: Option<u64>,
) -> Result<Vec<ProductDetails>> {
    let needle = query.to_lowercase();
    let limit = usize::try_from(limit.unwrap_or(DEFAULT_SEARCH_LIMIT)).unwrap_or(usize::MAX);

    let mut matches: Vec<(i32, String, Option<String>)> = active_products()
        .select_only()
        .columns([
            product::Column::Id,
            product::Column::Name,
            product::Column::Description,
        ])
        .into_tuple()
        .all(db)
        .await?;
    matches.retain(|(_, name, description)| {
        contains_ignore_case(name, &needle)
            || description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, &needle))
    });
    matches.sort_by(|a, b| (&a.1, a.0).cmp(&(&b.1, b.0)));
    matches.truncate(limit);
    debug!("Search matched {} products", matches.len());

    if matches.is_empty() {
        return Ok(Vec::new());
    }
    let products = active_products()
        .filter(product::Column::Id.is_in(matches.into_iter().map(|(id, _, _)| id)))
        .order_by_asc(product::Column::Name)
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;
    enrich_products(db, products).await
}

/// Picks the start of the random window: uniform over `0..=total - limit`, or 0 when
/// there are no more than `limit` products.
pub fn random_window_offset<R: Rng + ?Sized>(total: u64, limit: u64, rng: &mut R) -> u64 {
    rng.gen_range(0..=total.saturating_sub(limit))
}

/// Returns `limit` active products (name order) starting at a random offset.
///
/// This is one contiguous window of the name-ordered catalog, not a uniform sample:
/// products are only ever shown next to their alphabetical neighbours.
#[instrument(skip(db))]
pub async fn get_random_products(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<ProductDetails>> {
    let limit = limit.unwrap_or(DEFAULT_RANDOM_LIMIT);
    let total = active_products().count(db).await?;
    let offset = random_window_offset(total, limit, &mut rand::thread_rng());
    debug!("Random window: offset {} of {} active products", offset, total);

    let products = active_products()
        .order_by_asc(product::Column::Name)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;
    enrich_products(db, products).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use chrono::NaiveDate;
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;

    fn day(d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_products_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        ProductFixture::new("Old").created_at(day(1)).insert(&db).await?;
        ProductFixture::new("Newest").created_at(day(3)).insert(&db).await?;
        ProductFixture::new("Middle").created_at(day(2)).insert(&db).await?;
        ProductFixture::new("Retired")
            .created_at(day(4))
            .inactive()
            .insert(&db)
            .await?;

        let products = get_products(&db, None).await?;
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle", "Old"]);

        let capped = get_products(&db, Some(2)).await?;
        assert_eq!(capped.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_products_by_sub_category() -> Result<()> {
        let (db, category, sofas) = setup_with_sub_category().await?;
        let chairs = create_test_sub_category(&db, category.id, "Kursi Makan").await?;
        ProductFixture::new("Sofa B").sub_category(&sofas).insert(&db).await?;
        ProductFixture::new("Sofa A").sub_category(&sofas).insert(&db).await?;
        ProductFixture::new("Kursi A").sub_category(&chairs).insert(&db).await?;

        let products = get_products_by_sub_category(&db, sofas.id, None).await?;
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Sofa A", "Sofa B"]);

        let capped = get_products_by_sub_category(&db, sofas.id, Some(1)).await?;
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].name, "Sofa A");
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_id_prices() -> Result<()> {
        let db = setup_test_db().await?;
        let priced = ProductFixture::new("Sofa")
            .price(Decimal::new(150_000, 0))
            .tmp_price_buy(Decimal::new(90_000, 0))
            .insert(&db)
            .await?;
        let unpriced = ProductFixture::new("Meja").insert(&db).await?;

        let found = get_product_by_id(&db, priced.id).await?.unwrap();
        assert_eq!(found.price, Some(150_000.0));
        assert_eq!(found.tmp_price_buy, Some(90_000.0));

        let found = get_product_by_id(&db, unpriced.id).await?.unwrap();
        assert_eq!(found.price, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_id_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let retired = ProductFixture::new("Retired").inactive().insert(&db).await?;

        assert!(get_product_by_id(&db, 999_999).await?.is_none());
        assert!(get_product_by_id(&db, retired.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_search_matches_name_and_description() -> Result<()> {
        let db = setup_test_db().await?;
        ProductFixture::new("Sofa Minimalis").insert(&db).await?;
        ProductFixture::new("Kursi Tamu")
            .description("Cocok dipadukan dengan SOFA keluarga")
            .insert(&db)
            .await?;
        ProductFixture::new("Meja Makan").insert(&db).await?;
        ProductFixture::new("Sofa Bekas").inactive().insert(&db).await?;

        let results = search_products(&db, "sofa", None).await?;
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Kursi Tamu", "Sofa Minimalis"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() -> Result<()> {
        let db = setup_test_db().await?;
        ProductFixture::new("Diskon 50% Rak").insert(&db).await?;
        ProductFixture::new("Rak Buku").insert(&db).await?;

        let results = search_products(&db, "%", None).await?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Diskon 50% Rak");
        Ok(())
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() -> Result<()> {
        let db = setup_test_db().await?;
        ProductFixture::new("Kursi ÉCLAIR").insert(&db).await?;
        ProductFixture::new("Meja Kayu")
            .description("Finishing ÖL alami")
            .insert(&db)
            .await?;

        for query in ["éclair", "ÉCLAIR", "Éclair"] {
            let results = search_products(&db, query, None).await?;
            assert_eq!(results.len(), 1, "query {query:?}");
            assert_eq!(results[0].name, "Kursi ÉCLAIR");
        }
        let results = search_products(&db, "öl", None).await?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Meja Kayu");
        Ok(())
    }

    #[tokio::test]
    async fn test_search_limit_keeps_name_order() -> Result<()> {
        let db = setup_test_db().await?;
        for name in ["Rak D", "Rak B", "Rak A", "Rak C"] {
            ProductFixture::new(name).insert(&db).await?;
        }

        let results = search_products(&db, "rak", Some(2)).await?;
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rak A", "Rak B"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_search_respects_limit() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..25 {
            ProductFixture::new(&format!("Rak {i:02}")).insert(&db).await?;
        }

        assert_eq!(search_products(&db, "rak", None).await?.len(), 20);
        assert_eq!(search_products(&db, "rak", Some(5)).await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_random_products_returns_all_when_fewer_than_limit() -> Result<()> {
        let db = setup_test_db().await?;
        for name in ["E", "D", "C", "B", "A"] {
            ProductFixture::new(name).insert(&db).await?;
        }

        let products = get_random_products(&db, Some(10)).await?;
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_random_products_is_a_contiguous_window() -> Result<()> {
        let db = setup_test_db().await?;
        for i in 0..15 {
            ProductFixture::new(&format!("Produk {i:02}")).insert(&db).await?;
        }

        let products = get_random_products(&db, None).await?;
        assert_eq!(products.len(), 10);
        let first: u32 = products[0].name[7..].parse().unwrap();
        for (i, product) in products.iter().enumerate() {
            assert_eq!(product.name, format!("Produk {:02}", first + u32::try_from(i).unwrap()));
        }
        Ok(())
    }

    #[test]
    fn test_random_window_offset_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_window_offset(5, 10, &mut rng), 0);
        assert_eq!(random_window_offset(10, 10, &mut rng), 0);
        assert_eq!(random_window_offset(0, 10, &mut rng), 0);
        for _ in 0..200 {
            assert!(random_window_offset(15, 10, &mut rng) <= 5);
        }
    }
}
