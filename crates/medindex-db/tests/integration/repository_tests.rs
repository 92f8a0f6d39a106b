//! Integration tests for CatalogRepository.
//!
//! Verifies that the SQL queries reproduce the canonical ranking (score
//! descending, primary id ascending) and the case-insensitive substring
//! semantics of the catalog filters.

use medindex_core::models::CompanyRecord;
use medindex_core::paging::PageWindow;
use medindex_core::traits::{BrandFilter, CatalogStore};
use medindex_db::CatalogRepository;

use crate::integration::common::{
    insert_brand, insert_company, insert_generic, sample_brand, sample_generic, setup_test_db,
};

fn window(skip: u64, limit: u32) -> PageWindow {
    PageWindow { skip, limit }
}

/// Test 1: name filter is a case-insensitive substring; ranked pages order
/// by brand-name word count descending, then brand id.
#[tokio::test]
async fn test_name_filter_ranks_by_word_count() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(1, "Napa", None, 1)).await;
    insert_brand(&pool, &sample_brand(2, "Napa Extra", None, 1)).await;
    insert_brand(&pool, &sample_brand(3, "Napa Extend Max", None, 1)).await;
    insert_brand(&pool, &sample_brand(4, "Oradex", None, 1)).await;

    let filter = BrandFilter::NameContains("NAPA".to_string());
    let total = repo.count_brands(&filter).await.expect("count");
    assert_eq!(total, 3);

    let page = repo.ranked_brands(&filter, window(0, 10)).await.expect("page");
    let names: Vec<_> = page.iter().map(|b| b.brand_name.as_str()).collect();
    assert_eq!(names, vec!["Napa Extend Max", "Napa Extra", "Napa"]);
}

/// Test 2: equal word counts order by brand id ascending, and the ordering
/// is stable across repeated queries.
#[tokio::test]
async fn test_rank_ties_break_by_brand_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(30, "Napa One", None, 1)).await;
    insert_brand(&pool, &sample_brand(10, "Napa Two", None, 1)).await;
    insert_brand(&pool, &sample_brand(20, "Napa Ten", None, 1)).await;

    let filter = BrandFilter::NameContains("napa".to_string());
    let first = repo.ranked_brands(&filter, window(0, 10)).await.expect("page");
    let ids: Vec<_> = first.iter().map(|b| b.brand_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);

    let second = repo.ranked_brands(&filter, window(0, 10)).await.expect("page");
    assert_eq!(first, second);
}

/// Test 3: LIKE metacharacters in the search term match literally.
#[tokio::test]
async fn test_name_filter_escapes_metacharacters() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(1, "Gel 50%", None, 1)).await;
    insert_brand(&pool, &sample_brand(2, "Gel 505", None, 1)).await;

    let filter = BrandFilter::NameContains("50%".to_string());
    assert_eq!(repo.count_brands(&filter).await.expect("count"), 1);
    let page = repo.ranked_brands(&filter, window(0, 10)).await.expect("page");
    assert_eq!(page[0].brand_id, 1);
}

/// Test 4: offset/limit windows slice the ranked ordering.
#[tokio::test]
async fn test_window_slices_ranked_page() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    for i in 1..=15 {
        insert_brand(&pool, &sample_brand(i, "Napa", None, 1)).await;
    }

    let filter = BrandFilter::NameContains("napa".to_string());
    let first = repo.ranked_brands(&filter, window(0, 10)).await.expect("page");
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].brand_id, 1);

    let second = repo.ranked_brands(&filter, window(10, 10)).await.expect("page");
    assert_eq!(second.len(), 5);
    assert_eq!(second[0].brand_id, 11);
}

/// Test 5: exact foreign-key filters.
#[tokio::test]
async fn test_generic_and_company_filters_are_exact() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(1, "Fexo", Some(42), 7)).await;
    insert_brand(&pool, &sample_brand(2, "Fexofast", Some(42), 8)).await;
    insert_brand(&pool, &sample_brand(3, "Napa", Some(9), 7)).await;
    insert_brand(&pool, &sample_brand(4, "Orphan", None, 9)).await;

    let by_generic = BrandFilter::Generic(42);
    assert_eq!(repo.count_brands(&by_generic).await.expect("count"), 2);

    let by_company = BrandFilter::Company(7);
    let page = repo.ranked_brands(&by_company, window(0, 10)).await.expect("page");
    let ids: Vec<_> = page.iter().map(|b| b.brand_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

/// Test 6: point lookups hit and miss cleanly.
#[tokio::test]
async fn test_point_lookups() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(7, "Napa", Some(42), 1)).await;
    insert_generic(&pool, &sample_generic(42, "Paracetamol", &["fever", "pain"])).await;
    insert_company(
        &pool,
        &CompanyRecord {
            company_id: 1,
            company_name: "Beximco Pharmaceuticals Ltd.".to_string(),
        },
    )
    .await;

    let brand = repo.brand_by_id(7).await.expect("lookup").expect("brand");
    assert_eq!(brand.brand_name, "Napa");
    assert_eq!(brand.generic_id, Some(42));
    assert!(repo.brand_by_id(99_999_999).await.expect("lookup").is_none());

    let generic = repo.generic_by_id(42).await.expect("lookup").expect("generic");
    assert_eq!(generic.indication, vec!["fever", "pain"]);
    assert!(repo.generic_by_id(43).await.expect("lookup").is_none());

    let company = repo.company_by_id(1).await.expect("lookup").expect("company");
    assert_eq!(company.company_name, "Beximco Pharmaceuticals Ltd.");
    assert!(repo.company_by_id(2).await.expect("lookup").is_none());
}

/// Test 7: the representative brand for a generic is the lowest brand id.
#[tokio::test]
async fn test_first_brand_for_generic_is_lowest_id() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_brand(&pool, &sample_brand(12, "Fexo", Some(42), 1)).await;
    insert_brand(&pool, &sample_brand(5, "Fexofast", Some(42), 1)).await;

    let first = repo
        .first_brand_for_generic(42)
        .await
        .expect("lookup")
        .expect("brand");
    assert_eq!(first.brand_id, 5);

    assert!(repo.first_brand_for_generic(77).await.expect("lookup").is_none());
}

/// Test 8: indication search is a case-insensitive substring over the list,
/// ranked by indication count descending.
#[tokio::test]
async fn test_indication_search_ranks_by_count() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_generic(&pool, &sample_generic(1, "Cetirizine", &["Allergy"])).await;
    insert_generic(
        &pool,
        &sample_generic(2, "Fexofenadine", &["allergic rhinitis", "urticaria", "sneezing"]),
    )
    .await;
    insert_generic(&pool, &sample_generic(3, "Paracetamol", &["fever", "pain"])).await;

    let total = repo
        .count_generics_by_indication(Some("allerg"))
        .await
        .expect("count");
    assert_eq!(total, 2);

    let page = repo
        .ranked_generics_by_indication(Some("allerg"), window(0, 10))
        .await
        .expect("page");
    let ids: Vec<_> = page.iter().map(|g| g.generic_id).collect();
    assert_eq!(ids, vec![2, 1], "three indications outrank one");

    let all = repo
        .count_generics_by_indication(None)
        .await
        .expect("count");
    assert_eq!(all, 3);
}

/// Test 9: directory scans return the full collections in id order.
#[tokio::test]
async fn test_directory_scans_in_id_order() {
    let (pool, _container) = setup_test_db().await;
    let repo = CatalogRepository::new(pool.clone());

    insert_generic(&pool, &sample_generic(2, "Fexofenadine", &[])).await;
    insert_generic(&pool, &sample_generic(1, "Paracetamol", &[])).await;
    insert_company(
        &pool,
        &CompanyRecord {
            company_id: 9,
            company_name: "Square".to_string(),
        },
    )
    .await;
    insert_company(
        &pool,
        &CompanyRecord {
            company_id: 3,
            company_name: "Beximco".to_string(),
        },
    )
    .await;

    let generics = repo.all_generics().await.expect("scan");
    let generic_ids: Vec<_> = generics.iter().map(|g| g.generic_id).collect();
    assert_eq!(generic_ids, vec![1, 2]);

    let companies = repo.all_companies().await.expect("scan");
    let company_ids: Vec<_> = companies.iter().map(|c| c.company_id).collect();
    assert_eq!(company_ids, vec![3, 9]);
}
