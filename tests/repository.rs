use std::thread;

use chrono::Utc;
use pushkind_catalog::domain::category::NewCategory;
use pushkind_catalog::domain::product::{NewProduct, UpdateProduct};
use pushkind_catalog::domain::types::{CategoryId, CategoryName, ProductId, ProductName};
use pushkind_catalog::repository::{
    CategoryReader, CategoryWriter, DieselRepository, ProductListQuery, ProductReader,
    ProductWriter,
};

mod common;

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
        created_at: Utc::now().naive_utc(),
    }
}

fn new_product(name: &str, category_id: Option<CategoryId>) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid product name"),
        category_id,
        created_at: Utc::now().naive_utc(),
    }
}

#[test]
fn created_category_is_listed_with_exact_name() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .create_category(&new_category("Toys"))
        .expect("should create category");

    let categories = repo.list_categories().expect("should list categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, id);
    assert_eq!(categories[0].name, "Toys");
}

#[test]
fn renaming_category_does_not_duplicate_it() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .create_category(&new_category("Toys"))
        .expect("should create category");
    let affected = repo
        .update_category(id, &CategoryName::new("Toys & Games").expect("valid name"))
        .expect("should rename category");
    assert_eq!(affected, 1);

    let categories = repo.list_categories().expect("should list categories");
    let matching: Vec<_> = categories
        .iter()
        .filter(|c| c.name == "Toys & Games")
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(categories.iter().all(|c| c.name != "Toys"));
}

#[test]
fn missing_category_is_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let category = repo
        .get_category_by_id(CategoryId::new(999).expect("valid id"))
        .expect("lookup should succeed");
    assert!(category.is_none());
}

#[test]
fn delete_category_detaches_linked_products() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let books = repo
        .create_category(&new_category("Books"))
        .expect("should create category");
    let toys = repo
        .create_category(&new_category("Toys"))
        .expect("should create category");

    let novel = repo
        .create_product(&new_product("Novel", Some(books)))
        .expect("should create product");
    let atlas = repo
        .create_product(&new_product("Atlas", Some(books)))
        .expect("should create product");
    let kite = repo
        .create_product(&new_product("Kite", Some(toys)))
        .expect("should create product");

    let deleted = repo.delete_category(books).expect("should delete category");
    assert_eq!(deleted, 1);

    assert!(
        repo.get_category_by_id(books)
            .expect("lookup should succeed")
            .is_none()
    );

    for id in [novel, atlas] {
        let product = repo
            .get_product_by_id(id)
            .expect("lookup should succeed")
            .expect("product should remain after category deletion");
        assert_eq!(product.category_id, None);
        assert_eq!(product.category_name, None);
    }

    let kite = repo
        .get_product_by_id(kite)
        .expect("lookup should succeed")
        .expect("unrelated product should remain");
    assert_eq!(kite.category_id, Some(toys));
    assert_eq!(kite.category_name.expect("category name"), "Toys");
}

#[test]
fn product_pages_follow_page_size() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    for i in 1..=23 {
        repo.create_product(&new_product(&format!("Product {i}"), None))
            .expect("should create product");
    }

    for (page, expected) in [(1, 10), (2, 10), (3, 3), (4, 0)] {
        let (total, items) = repo
            .list_products(ProductListQuery::default().paginate(page, 10))
            .expect("should list products");
        assert_eq!(total, 23);
        assert_eq!(items.len(), expected, "page {page}");
    }

    let (_, first_page) = repo
        .list_products(ProductListQuery::default().paginate(1, 10))
        .expect("should list products");
    assert_eq!(first_page[0].name, "Product 23");
}

#[test]
fn product_list_includes_category_name() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let books = repo
        .create_category(&new_category("Books"))
        .expect("should create category");
    repo.create_product(&new_product("Novel", Some(books)))
        .expect("should create product");
    repo.create_product(&new_product("Loose", None))
        .expect("should create product");

    let (_, items) = repo
        .list_products(ProductListQuery::default())
        .expect("should list products");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Loose");
    assert_eq!(items[0].category_name, None);
    assert_eq!(items[1].category_name.clone().expect("category name"), "Books");
}

#[test]
fn update_product_can_clear_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let books = repo
        .create_category(&new_category("Books"))
        .expect("should create category");
    let id = repo
        .create_product(&new_product("Novel", Some(books)))
        .expect("should create product");

    let affected = repo
        .update_product(
            id,
            &UpdateProduct {
                name: ProductName::new("Paperback").expect("valid name"),
                category_id: None,
            },
        )
        .expect("should update product");
    assert_eq!(affected, 1);

    let product = repo
        .get_product_by_id(id)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(product.name, "Paperback");
    assert_eq!(product.category_id, None);
}

#[test]
fn delete_product_removes_row() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let id = repo
        .create_product(&new_product("Novel", None))
        .expect("should create product");

    assert_eq!(repo.delete_product(id).expect("should delete"), 1);
    assert_eq!(repo.delete_product(id).expect("should delete"), 0);
    assert!(
        repo.get_product_by_id(id)
            .expect("lookup should succeed")
            .is_none()
    );
    assert!(
        repo.get_product_by_id(ProductId::new(12345).expect("valid id"))
            .expect("lookup should succeed")
            .is_none()
    );
}

#[test]
fn concurrent_creates_are_all_stored_once() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = repo.clone();
            thread::spawn(move || {
                repo.create_product(&new_product(&format!("Concurrent {i}"), None))
                    .expect("concurrent create should succeed")
            })
        })
        .collect();

    let mut ids: Vec<ProductId> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should not panic"))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    let (total, items) = repo
        .list_products(ProductListQuery::default())
        .expect("should list products");
    assert_eq!(total, 8);
    for i in 0..8 {
        let name = format!("Concurrent {i}");
        assert_eq!(
            items.iter().filter(|p| p.name.as_str() == name).count(),
            1
        );
    }
}
