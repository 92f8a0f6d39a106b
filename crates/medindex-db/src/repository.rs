//! Catalog repository for PostgreSQL.
//!
//! Ranked pages push filter, scoring, ordering, and windowing into SQL so a
//! page request touches only the rows it returns. The two directory scans
//! (`all_generics`, `all_companies`) deliberately do not: they materialize
//! the whole collection for in-memory pagination upstream, which does not
//! scale past a reference-sized catalog and is kept only for behavioral
//! parity with the upstream service.

use medindex_core::error::CatalogError;
use medindex_core::models::{CompanyRecord, GenericRecord, MedicineRecord};
use medindex_core::paging::PageWindow;
use medindex_core::traits::{BrandFilter, CatalogStore};
use sqlx::{PgPool, Pool, Postgres};

/// Column lists for SELECT queries. Must remain const literals to ensure SQL
/// safety since format!() bypasses sqlx compile-time validation.
const BRAND_COLUMNS: &str =
    "brand_id, brand_name, form, generic_id, company_id, pack_size, price, strength";
const GENERIC_COLUMNS: &str = "generic_id, generic_name, generic_name_bangla, indication";
const COMPANY_COLUMNS: &str = "company_id, company_name";

/// Brand relevance in SQL: whitespace-delimited token count of the brand
/// name. Must order identically to `medindex_core::ranking::word_score`.
const BRAND_SCORE: &str = "CASE WHEN btrim(brand_name) = '' THEN 0 \
     ELSE array_length(regexp_split_to_array(btrim(brand_name), '\\s+'), 1) END";

/// Repository for the read-only medicine catalog in PostgreSQL.
///
/// # Examples
///
/// ```no_run
/// use sqlx::postgres::PgPoolOptions;
/// use medindex_db::CatalogRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = PgPoolOptions::new()
///     .max_connections(5)
///     .connect("postgresql://localhost/medindex")
///     .await?;
///
/// let repo = CatalogRepository::new(pool);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters and wraps the term for a substring match.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl CatalogStore for CatalogRepository {
    async fn count_brands(&self, filter: &BrandFilter) -> Result<u64, CatalogError> {
        let count: (i64,) = match filter {
            BrandFilter::All => {
                sqlx::query_as("SELECT COUNT(*) FROM brands")
                    .fetch_one(&self.pool)
                    .await
            }
            BrandFilter::NameContains(name) => {
                sqlx::query_as("SELECT COUNT(*) FROM brands WHERE brand_name ILIKE $1")
                    .bind(contains_pattern(name))
                    .fetch_one(&self.pool)
                    .await
            }
            BrandFilter::Generic(generic_id) => {
                sqlx::query_as("SELECT COUNT(*) FROM brands WHERE generic_id = $1")
                    .bind(generic_id)
                    .fetch_one(&self.pool)
                    .await
            }
            BrandFilter::Company(company_id) => {
                sqlx::query_as("SELECT COUNT(*) FROM brands WHERE company_id = $1")
                    .bind(company_id)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(CatalogError::DatabaseError)?;

        Ok(count.0 as u64)
    }

    async fn ranked_brands(
        &self,
        filter: &BrandFilter,
        window: PageWindow,
    ) -> Result<Vec<MedicineRecord>, CatalogError> {
        match filter {
            BrandFilter::All => {
                let query = format!(
                    "SELECT {} FROM brands ORDER BY {} DESC, brand_id ASC OFFSET $1 LIMIT $2",
                    BRAND_COLUMNS, BRAND_SCORE
                );
                sqlx::query_as::<_, MedicineRecord>(&query)
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            BrandFilter::NameContains(name) => {
                let query = format!(
                    "SELECT {} FROM brands WHERE brand_name ILIKE $1 \
                     ORDER BY {} DESC, brand_id ASC OFFSET $2 LIMIT $3",
                    BRAND_COLUMNS, BRAND_SCORE
                );
                sqlx::query_as::<_, MedicineRecord>(&query)
                    .bind(contains_pattern(name))
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            BrandFilter::Generic(generic_id) => {
                let query = format!(
                    "SELECT {} FROM brands WHERE generic_id = $1 \
                     ORDER BY {} DESC, brand_id ASC OFFSET $2 LIMIT $3",
                    BRAND_COLUMNS, BRAND_SCORE
                );
                sqlx::query_as::<_, MedicineRecord>(&query)
                    .bind(generic_id)
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            BrandFilter::Company(company_id) => {
                let query = format!(
                    "SELECT {} FROM brands WHERE company_id = $1 \
                     ORDER BY {} DESC, brand_id ASC OFFSET $2 LIMIT $3",
                    BRAND_COLUMNS, BRAND_SCORE
                );
                sqlx::query_as::<_, MedicineRecord>(&query)
                    .bind(company_id)
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(CatalogError::DatabaseError)
    }

    async fn brand_by_id(&self, brand_id: i32) -> Result<Option<MedicineRecord>, CatalogError> {
        let query = format!("SELECT {} FROM brands WHERE brand_id = $1", BRAND_COLUMNS);
        sqlx::query_as::<_, MedicineRecord>(&query)
            .bind(brand_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }

    async fn first_brand_for_generic(
        &self,
        generic_id: i32,
    ) -> Result<Option<MedicineRecord>, CatalogError> {
        let query = format!(
            "SELECT {} FROM brands WHERE generic_id = $1 ORDER BY brand_id ASC LIMIT 1",
            BRAND_COLUMNS
        );
        sqlx::query_as::<_, MedicineRecord>(&query)
            .bind(generic_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }

    async fn company_by_id(&self, company_id: i32) -> Result<Option<CompanyRecord>, CatalogError> {
        let query = format!(
            "SELECT {} FROM companies WHERE company_id = $1",
            COMPANY_COLUMNS
        );
        sqlx::query_as::<_, CompanyRecord>(&query)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }

    async fn generic_by_id(&self, generic_id: i32) -> Result<Option<GenericRecord>, CatalogError> {
        let query = format!(
            "SELECT {} FROM generics WHERE generic_id = $1",
            GENERIC_COLUMNS
        );
        sqlx::query_as::<_, GenericRecord>(&query)
            .bind(generic_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }

    async fn count_generics_by_indication(
        &self,
        symptom: Option<&str>,
    ) -> Result<u64, CatalogError> {
        let count: (i64,) = match symptom {
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM generics")
                    .fetch_one(&self.pool)
                    .await
            }
            Some(symptom) => {
                sqlx::query_as(
                    "SELECT COUNT(*) FROM generics WHERE EXISTS \
                     (SELECT 1 FROM unnest(indication) AS entry WHERE entry ILIKE $1)",
                )
                .bind(contains_pattern(symptom))
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(CatalogError::DatabaseError)?;

        Ok(count.0 as u64)
    }

    async fn ranked_generics_by_indication(
        &self,
        symptom: Option<&str>,
        window: PageWindow,
    ) -> Result<Vec<GenericRecord>, CatalogError> {
        // Indication relevance is the list length, per the canonical ranking.
        match symptom {
            None => {
                let query = format!(
                    "SELECT {} FROM generics \
                     ORDER BY cardinality(indication) DESC, generic_id ASC OFFSET $1 LIMIT $2",
                    GENERIC_COLUMNS
                );
                sqlx::query_as::<_, GenericRecord>(&query)
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
            Some(symptom) => {
                let query = format!(
                    "SELECT {} FROM generics WHERE EXISTS \
                     (SELECT 1 FROM unnest(indication) AS entry WHERE entry ILIKE $1) \
                     ORDER BY cardinality(indication) DESC, generic_id ASC OFFSET $2 LIMIT $3",
                    GENERIC_COLUMNS
                );
                sqlx::query_as::<_, GenericRecord>(&query)
                    .bind(contains_pattern(symptom))
                    .bind(window.skip as i64)
                    .bind(window.limit as i64)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(CatalogError::DatabaseError)
    }

    async fn all_generics(&self) -> Result<Vec<GenericRecord>, CatalogError> {
        // Full-collection scan; see the module note on the directory path.
        let query = format!(
            "SELECT {} FROM generics ORDER BY generic_id ASC",
            GENERIC_COLUMNS
        );
        sqlx::query_as::<_, GenericRecord>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }

    async fn all_companies(&self) -> Result<Vec<CompanyRecord>, CatalogError> {
        let query = format!(
            "SELECT {} FROM companies ORDER BY company_id ASC",
            COMPANY_COLUMNS
        );
        sqlx::query_as::<_, CompanyRecord>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(CatalogError::DatabaseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("napa"), "%napa%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
