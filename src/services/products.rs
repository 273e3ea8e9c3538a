use crate::domain::product::Product;
use crate::domain::types::{CategoryId, ProductId};
use crate::dto::categories::CategoryDto;
use crate::forms::products::ProductFormPayload;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    CategoryReader, ProductListQuery, ProductReader, ProductWriter, RepositoryError,
};

use super::{ServiceError, ServiceResult};

/// Everything the product edit page needs.
#[derive(Debug)]
pub struct ProductEditData {
    pub product: Product,
    pub categories: Vec<CategoryDto>,
}

/// Reject category references that do not point at an existing category.
fn ensure_category_exists<R>(category_id: Option<CategoryId>, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader,
{
    let Some(category_id) = category_id else {
        return Ok(());
    };

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!(
            "Category {category_id} does not exist"
        ))),
        Err(e) => {
            log::error!("Failed to get category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// The category passed the existence check but was deleted before the write.
fn category_vanished(category_id: Option<CategoryId>) -> ServiceError {
    match category_id {
        Some(id) => ServiceError::Form(format!("Category {id} does not exist")),
        None => ServiceError::Form("Product violates a storage constraint".to_string()),
    }
}

fn find_product<R>(product_id: ProductId, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for rendering the products page.
///
/// `page` is 1-indexed; values below one are treated as the first page.
/// Pages past the end yield an empty item list with correct totals.
pub fn show_products<R>(page: usize, repo: &R) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader,
{
    let page = page.max(1);
    match repo.list_products(ProductListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE)) {
        Ok((total, products)) => Ok(Paginated::new(
            products,
            page,
            total,
            DEFAULT_ITEMS_PER_PAGE,
        )),
        Err(e) => {
            log::error!("Failed to list products for page {page}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Categories offered by the selection control on product forms.
pub fn show_category_options<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories for product form: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn show_product<R>(product_id: ProductId, repo: &R) -> ServiceResult<ProductEditData>
where
    R: ProductReader + CategoryReader,
{
    let product = find_product(product_id, repo)?;
    let categories = show_category_options(repo)?;
    Ok(ProductEditData {
        product,
        categories,
    })
}

pub fn add_product<R>(payload: ProductFormPayload, repo: &R) -> ServiceResult<ProductId>
where
    R: CategoryReader + ProductWriter,
{
    ensure_category_exists(payload.category_id, repo)?;

    let product = payload.into_new_product();
    match repo.create_product(&product) {
        Ok(id) => Ok(id),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Rejected product '{}': {e}", product.name);
            Err(category_vanished(product.category_id))
        }
        Err(e) => {
            log::error!("Failed to create product '{}': {e}", product.name);
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_product<R>(
    product_id: ProductId,
    payload: ProductFormPayload,
    repo: &R,
) -> ServiceResult<()>
where
    R: CategoryReader + ProductReader + ProductWriter,
{
    find_product(product_id, repo)?;
    ensure_category_exists(payload.category_id, repo)?;

    let product = payload.into_update_product();
    match repo.update_product(product_id, &product) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Rejected update of product {product_id}: {e}");
            Err(category_vanished(product.category_id))
        }
        Err(e) => {
            log::error!("Failed to update product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_product<R>(product_id: ProductId, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    match repo.delete_product(product_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
