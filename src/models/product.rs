use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::{CategoryId, CategoryName, ProductName, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub category_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Changeset applied by product edits.
///
/// `treat_none_as_null` makes clearing the category write `NULL` instead of
/// skipping the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct {
    pub name: String,
    pub category_id: Option<i32>,
}

/// A product row joined with the name of its category, if any.
pub type ProductWithCategory = (Product, Option<String>);

impl TryFrom<ProductWithCategory> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from((product, category_name): ProductWithCategory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            category_id: product.category_id.map(CategoryId::new).transpose()?,
            category_name: category_name.map(CategoryName::new).transpose()?,
            created_at: product.created_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            category_id: product.category_id.map(CategoryId::get),
            created_at: product.created_at,
        }
    }
}

impl From<DomainUpdateProduct> for UpdateProduct {
    fn from(product: DomainUpdateProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            category_id: product.category_id.map(CategoryId::get),
        }
    }
}
