use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::forms::categories::{AddCategoryFormPayload, UpdateCategoryFormPayload};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Fetch a category or fail with [`ServiceError::NotFound`].
fn find_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Load the category shown on the edit form.
pub fn show_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    find_category(category_id, repo)
}

pub fn add_category<R>(payload: AddCategoryFormPayload, repo: &R) -> ServiceResult<CategoryId>
where
    R: CategoryWriter,
{
    let category = payload.into_new_category();
    match repo.create_category(&category) {
        Ok(id) => Ok(id),
        Err(e) => {
            log::error!("Failed to create category '{}': {e}", category.name);
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_category<R>(
    category_id: CategoryId,
    payload: UpdateCategoryFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    find_category(category_id, repo)?;

    match repo.update_category(category_id, &payload.name) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to update category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Delete a category, leaving its products uncategorized.
pub fn delete_category<R>(category_id: CategoryId, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    find_category(category_id, repo)?;

    match repo.delete_category(category_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Product;
    use crate::domain::types::{CategoryName, ProductId, ProductName};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_product(id: i32, category_id: Option<i32>) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(format!("Product {id}")).unwrap(),
            category_id: category_id.map(|c| CategoryId::new(c).unwrap()),
            category_name: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn lists_categories() {
        let repo = TestRepository::new(vec![sample_category(1, "Books")], vec![]);

        let categories = show_categories(&repo).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, 1);
    }

    #[test]
    fn added_category_appears_with_submitted_name() {
        let repo = TestRepository::default();
        let payload = AddCategoryFormPayload {
            name: CategoryName::new("Toys").unwrap(),
        };

        let id = add_category(payload, &repo).unwrap();

        let categories = show_categories(&repo).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, id);
        assert_eq!(categories[0].name, "Toys");
    }

    #[test]
    fn editing_missing_category_is_not_found() {
        let repo = TestRepository::default();

        let err = show_category(CategoryId::new(42).unwrap(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);

        let payload = UpdateCategoryFormPayload {
            name: CategoryName::new("Anything").unwrap(),
        };
        let err = update_category(CategoryId::new(42).unwrap(), payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn rename_does_not_duplicate() {
        let repo = TestRepository::new(vec![sample_category(1, "Toys")], vec![]);
        let payload = UpdateCategoryFormPayload {
            name: CategoryName::new("Toys & Games").unwrap(),
        };

        update_category(CategoryId::new(1).unwrap(), payload, &repo).unwrap();

        let categories = show_categories(&repo).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Toys & Games");
    }

    #[test]
    fn delete_detaches_products() {
        let repo = TestRepository::new(
            vec![sample_category(1, "Books"), sample_category(2, "Toys")],
            vec![
                sample_product(1, Some(1)),
                sample_product(2, Some(2)),
                sample_product(3, None),
            ],
        );

        delete_category(CategoryId::new(1).unwrap(), &repo).unwrap();

        assert_eq!(repo.categories().len(), 1);
        let products = repo.products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].category_id, None);
        assert_eq!(products[1].category_id, Some(CategoryId::new(2).unwrap()));
    }

    #[test]
    fn deleting_missing_category_is_not_found() {
        let repo = TestRepository::default();

        let err = delete_category(CategoryId::new(5).unwrap(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}
