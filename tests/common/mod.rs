//! Helpers for integration tests.

#![allow(dead_code)]

use diesel::prelude::*;
use pushkind_catalog::bootstrap::{create_tables, initialize_database};
use pushkind_catalog::db::{DbPool, PoolSettings, establish_connection_pool};
use tempfile::TempDir;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempdir: TempDir,
    pool: DbPool,
}

impl TestDb {
    /// Empty schema without sample rows.
    pub fn new() -> Self {
        let test_db = Self::open();
        let mut conn = test_db
            .pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        create_tables(&mut conn).expect("Schema creation failed");
        drop(conn);
        test_db
    }

    /// Schema plus the first-run sample data.
    pub fn seeded() -> Self {
        let test_db = Self::open();
        initialize_database(&test_db.pool).expect("Database initialization failed");
        test_db
    }

    fn open() -> Self {
        let tempdir = TempDir::new().expect("Failed to create temp dir");
        let path = tempdir.path().join("nested").join("catalog.db");
        let pool = establish_connection_pool(
            path.to_str().expect("temp path should be valid UTF-8"),
            &PoolSettings::default(),
        )
        .expect("Failed to establish SQLite connection.");
        TestDb {
            _tempdir: tempdir,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn count(&self, table: &str) -> i64 {
        use pushkind_catalog::schema::{categories, products};

        let mut conn = self.pool.get().expect("should acquire DB connection");
        match table {
            "categories" => categories::table.count().get_result::<i64>(&mut conn),
            "products" => products::table.count().get_result::<i64>(&mut conn),
            other => panic!("unknown table {other}"),
        }
        .expect("count should succeed")
    }
}
