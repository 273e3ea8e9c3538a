use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
};
use crate::repository::{
    DieselRepository, ProductListQuery, ProductReader, ProductWriter, RepositoryResult,
};

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let total = products::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table
            .left_join(categories::table)
            .select((DbProduct::as_select(), categories::name.nullable()))
            .order(products::id.desc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        // Limit and offset are bound parameters, never spliced into the SQL.
        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let items = items
            .load::<(DbProduct, Option<String>)>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok((total, items))
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let product = products::table
            .left_join(categories::table)
            .filter(products::id.eq(id.get()))
            .select((DbProduct::as_select(), categories::name.nullable()))
            .first::<(DbProduct, Option<String>)>(&mut conn)
            .optional()?;

        let product = product.map(TryInto::try_into).transpose()?;
        Ok(product)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<ProductId> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let id = diesel::insert_into(products::table)
            .values(db_product)
            .returning(products::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ProductId::new(id)?)
    }

    fn update_product(&self, id: ProductId, product: &UpdateProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let changes: DbUpdateProduct = product.clone().into();

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set(changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(products::table.filter(products::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
