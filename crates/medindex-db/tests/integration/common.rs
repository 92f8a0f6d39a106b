//! Test utilities for integration tests.
//!
//! Provides helper functions to set up isolated PostgreSQL containers and
//! seed the read-only catalog tables for each test.

use medindex_core::models::{CompanyRecord, GenericRecord, MedicineRecord};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

/// SQL migrations to initialize the test database schema.
/// Each statement must be executed separately due to sqlx limitations.
const MIGRATIONS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS brands (
        brand_id INTEGER PRIMARY KEY,
        brand_name TEXT NOT NULL,
        form TEXT NOT NULL,
        generic_id INTEGER,
        company_id INTEGER NOT NULL,
        pack_size TEXT NOT NULL,
        price TEXT NOT NULL,
        strength TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS generics (
        generic_id INTEGER PRIMARY KEY,
        generic_name TEXT NOT NULL,
        generic_name_bangla TEXT NOT NULL DEFAULT '',
        indication TEXT[] NOT NULL DEFAULT '{}'
    )"#,
    r#"CREATE TABLE IF NOT EXISTS companies (
        company_id INTEGER PRIMARY KEY,
        company_name TEXT NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_brands_generic ON brands(generic_id)",
    "CREATE INDEX IF NOT EXISTS idx_brands_company ON brands(company_id)",
];

/// Sets up a PostgreSQL container and returns a connection pool.
///
/// Each call creates a fresh, isolated database container. The container is
/// automatically cleaned up when the returned `ContainerAsync` is dropped.
///
/// # Returns
///
/// A tuple of (PgPool, ContainerAsync) - keep the container alive for the
/// test duration.
pub async fn setup_test_db() -> (PgPool, ContainerAsync<GenericImage>) {
    let container = GenericImage::new("postgres", "16-alpine")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "postgres")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let connection_string = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

    // Create connection pool with retry logic for container startup
    const MAX_RETRIES: u32 = 30;
    let mut retries = 0;
    let pool = loop {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect(&connection_string)
            .await
        {
            Ok(pool) => break pool,
            Err(e) => {
                retries += 1;
                if retries >= MAX_RETRIES {
                    panic!(
                        "Failed to connect to database after {} retries: {}",
                        MAX_RETRIES, e
                    );
                }
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    };

    for migration in MIGRATIONS {
        sqlx::query(migration)
            .execute(&pool)
            .await
            .expect("Failed to run migration");
    }

    (pool, container)
}

/// Creates a sample brand row.
pub fn sample_brand(
    brand_id: i32,
    brand_name: &str,
    generic_id: Option<i32>,
    company_id: i32,
) -> MedicineRecord {
    MedicineRecord {
        brand_id,
        brand_name: brand_name.to_string(),
        form: "Tablet".to_string(),
        generic_id,
        company_id,
        pack_size: "50's pack".to_string(),
        price: "2.50".to_string(),
        strength: "500 mg".to_string(),
    }
}

/// Creates a sample generic row.
pub fn sample_generic(generic_id: i32, generic_name: &str, indication: &[&str]) -> GenericRecord {
    GenericRecord {
        generic_id,
        generic_name: generic_name.to_string(),
        generic_name_bangla: String::new(),
        indication: indication.iter().map(|s| s.to_string()).collect(),
    }
}

pub async fn insert_brand(pool: &PgPool, brand: &MedicineRecord) {
    sqlx::query(
        r#"
        INSERT INTO brands (brand_id, brand_name, form, generic_id, company_id, pack_size, price, strength)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(brand.brand_id)
    .bind(&brand.brand_name)
    .bind(&brand.form)
    .bind(brand.generic_id)
    .bind(brand.company_id)
    .bind(&brand.pack_size)
    .bind(&brand.price)
    .bind(&brand.strength)
    .execute(pool)
    .await
    .expect("insert brand");
}

pub async fn insert_generic(pool: &PgPool, generic: &GenericRecord) {
    sqlx::query(
        r#"
        INSERT INTO generics (generic_id, generic_name, generic_name_bangla, indication)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(generic.generic_id)
    .bind(&generic.generic_name)
    .bind(&generic.generic_name_bangla)
    .bind(&generic.indication)
    .execute(pool)
    .await
    .expect("insert generic");
}

pub async fn insert_company(pool: &PgPool, company: &CompanyRecord) {
    sqlx::query("INSERT INTO companies (company_id, company_name) VALUES ($1, $2)")
        .bind(company.company_id)
        .bind(&company.company_name)
        .execute(pool)
        .await
        .expect("insert company");
}
