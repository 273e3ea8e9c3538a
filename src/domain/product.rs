use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, ProductId, ProductName};

/// A product, optionally filed under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// `None` when the product is uncategorized or its category was deleted.
    pub category_id: Option<CategoryId>,
    /// Display name of the referenced category, resolved by a left join.
    pub category_name: Option<CategoryName>,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    pub category_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
}

/// Replacement values for an existing [`Product`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub category_id: Option<CategoryId>,
}
