//! Idempotent schema creation and first-run sample data.

use chrono::Utc;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::{DbError, DbPool};

const CREATE_CATEGORIES: &str = "CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_PRODUCTS: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255) NOT NULL,
    categoryId INTEGER NULL REFERENCES categories(id) ON DELETE SET NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const SAMPLE_CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Books"];

/// Sample products paired with the name of the category they belong to.
const SAMPLE_PRODUCTS: [(&str, &str); 3] = [
    ("Laptop", "Electronics"),
    ("T-Shirt", "Clothing"),
    ("Novel", "Books"),
];

/// Rows inserted by [`seed_sample_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
}

/// Create the `categories` and `products` tables if they are missing.
///
/// Foreign key enforcement is switched off while the tables are created so
/// they can be created in any order, and switched back on afterwards.
pub fn create_tables(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute("PRAGMA foreign_keys = OFF")?;
    let created = conn
        .batch_execute(CREATE_CATEGORIES)
        .and_then(|_| conn.batch_execute(CREATE_PRODUCTS));
    conn.batch_execute("PRAGMA foreign_keys = ON")?;
    created
}

/// Insert sample rows into whichever tables are empty.
///
/// Sample products are linked to sample categories by name; a product whose
/// category is missing is stored uncategorized.
pub fn seed_sample_data(conn: &mut SqliteConnection) -> QueryResult<SeedReport> {
    use crate::schema::{categories, products};

    conn.immediate_transaction(|conn| {
        let mut report = SeedReport::default();
        let now = Utc::now().naive_utc();

        let category_count = categories::table.count().get_result::<i64>(conn)?;
        if category_count == 0 {
            for name in SAMPLE_CATEGORIES {
                report.categories += diesel::insert_into(categories::table)
                    .values((categories::name.eq(name), categories::created_at.eq(now)))
                    .execute(conn)?;
            }
        }

        let product_count = products::table.count().get_result::<i64>(conn)?;
        if product_count == 0 {
            for (name, category_name) in SAMPLE_PRODUCTS {
                let category_id = categories::table
                    .filter(categories::name.eq(category_name))
                    .select(categories::id)
                    .order(categories::id.asc())
                    .first::<i32>(conn)
                    .optional()?;

                report.products += diesel::insert_into(products::table)
                    .values((
                        products::name.eq(name),
                        products::category_id.eq(category_id),
                        products::created_at.eq(now),
                    ))
                    .execute(conn)?;
            }
        }

        Ok(report)
    })
}

/// Run schema creation and seeding on a single pooled connection.
pub fn initialize_database(pool: &DbPool) -> Result<SeedReport, DbError> {
    let mut conn = pool.get()?;
    create_tables(&mut conn)?;
    let report = seed_sample_data(&mut conn)?;

    if report.categories > 0 || report.products > 0 {
        log::info!(
            "Seeded {} sample categories and {} sample products",
            report.categories,
            report.products
        );
    }

    Ok(report)
}
