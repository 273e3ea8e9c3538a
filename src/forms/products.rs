use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{CategoryId, ProductName, TypeConstraintError};

/// Interpret the `categoryId` select value.
///
/// An absent or empty value means "uncategorized"; anything else has to be a
/// positive integer.
fn parse_category_id(value: Option<String>) -> Result<Option<CategoryId>, ProductFormError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let raw = trimmed
        .parse::<i32>()
        .map_err(|_| ProductFormError::InvalidCategoryId(trimmed.to_string()))?;
    Ok(Some(CategoryId::new(raw)?))
}

/// Body of both the add and the edit product forms.
#[derive(Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default, rename = "categoryId")]
    pub category_id: Option<String>,
}

pub type AddProductForm = ProductForm;
pub type UpdateProductForm = ProductForm;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub name: ProductName,
    pub category_id: Option<CategoryId>,
}

impl ProductFormPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            category_id: self.category_id,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn into_update_product(self) -> UpdateProduct {
        UpdateProduct {
            name: self.name,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Category id must be an integer, got '{0}'")]
    InvalidCategoryId(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: ProductName::new(value.name)?,
            category_id: parse_category_id(value.category_id)?,
        })
    }
}
