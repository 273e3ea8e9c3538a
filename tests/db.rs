use diesel::prelude::*;
use pushkind_catalog::bootstrap::{create_tables, initialize_database, seed_sample_data};
use pushkind_catalog::db::{DbError, PoolSettings, establish_connection_pool};
use pushkind_catalog::schema::{categories, products};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn unusable_database_location_fails_startup() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let blocker = dir.path().join("file.txt");
    std::fs::write(&blocker, b"not a directory").expect("should write file");
    let url = blocker.join("catalog.db");

    let result = establish_connection_pool(
        url.to_str().expect("utf-8 path"),
        &PoolSettings::default(),
    );

    assert!(matches!(result, Err(DbError::Io(_))));
}

#[test]
fn initialization_seeds_empty_database_once() {
    let test_db = common::TestDb::seeded();
    assert_eq!(test_db.count("categories"), 3);
    assert_eq!(test_db.count("products"), 3);

    let report = initialize_database(&test_db.pool()).expect("second run should succeed");
    assert_eq!(report.categories, 0);
    assert_eq!(report.products, 0);
    assert_eq!(test_db.count("categories"), 3);
    assert_eq!(test_db.count("products"), 3);
}

#[test]
fn seeded_products_reference_seeded_categories() {
    let test_db = common::TestDb::seeded();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let rows: Vec<(String, Option<String>)> = products::table
        .left_join(categories::table)
        .select((products::name, categories::name.nullable()))
        .order(products::id.asc())
        .load(&mut conn)
        .expect("should load seeded products");

    assert_eq!(
        rows,
        vec![
            ("Laptop".to_string(), Some("Electronics".to_string())),
            ("T-Shirt".to_string(), Some("Clothing".to_string())),
            ("Novel".to_string(), Some("Books".to_string())),
        ]
    );
}

#[test]
fn seeding_skips_tables_that_already_have_rows() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    diesel::insert_into(categories::table)
        .values(categories::name.eq("Garden"))
        .execute(&mut conn)
        .expect("should insert category");

    let report = seed_sample_data(&mut conn).expect("seeding should succeed");
    assert_eq!(report.categories, 0);
    assert_eq!(report.products, 3);

    // Sample categories were not created, so sample products stay uncategorized.
    let categorized: i64 = products::table
        .filter(products::category_id.is_not_null())
        .count()
        .get_result(&mut conn)
        .expect("count should succeed");
    assert_eq!(categorized, 0);
}

#[test]
fn create_tables_is_idempotent() {
    let test_db = common::TestDb::seeded();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    create_tables(&mut conn).expect("second create should succeed");
    assert_eq!(test_db.count("products"), 3);
}

#[test]
fn foreign_keys_are_enforced_on_pooled_connections() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let result = diesel::insert_into(products::table)
        .values((products::name.eq("Orphan"), products::category_id.eq(Some(404))))
        .execute(&mut conn);

    assert!(result.is_err());
}
