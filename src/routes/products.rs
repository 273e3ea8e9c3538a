use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::ProductId;
use crate::forms::products::{AddProductForm, ProductFormPayload, UpdateProductForm};
use crate::pagination::parse_page;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, run_blocking, service_error_response};
use crate::services::ServiceError;
use crate::services::products::{
    add_product as add_product_service, delete_product as delete_product_service,
    show_category_options as show_category_options_service,
    show_product as show_product_service, show_products as show_products_service,
    update_product as update_product_service,
};

/// Raw query pairs, so that junk like `?page=abc` or a repeated `page` key
/// falls back instead of failing extraction. The first `page` wins.
type ProductsQueryParams = Vec<(String, String)>;

fn page_param(params: &ProductsQueryParams) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str())
}

fn parse_product_id(product_id: i32) -> Result<ProductId, HttpResponse> {
    ProductId::new(product_id).map_err(|e| HttpResponse::BadRequest().body(e.to_string()))
}

#[get("/products")]
pub async fn show_products(
    params: web::Query<ProductsQueryParams>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = parse_page(page_param(&params));
    let repo = repo.get_ref().clone();
    match run_blocking(move || show_products_service(page, &repo)).await {
        Ok(products) => {
            let mut context = base_context(&flash_messages, "products", "Products");
            context.insert("products", &products);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/products/add")]
pub async fn show_add_product(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    match run_blocking(move || show_category_options_service(&repo)).await {
        Ok(categories) => {
            let mut context = base_context(&flash_messages, "products", "Add Product");
            context.insert("categories", &categories);
            render_template(&tera, "products/add.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/products/add")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    let payload: ProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || add_product_service(payload, &repo)).await {
        Ok(_) => {
            FlashMessage::success("Product added.").send();
            redirect("/products")
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/products/edit/{product_id}")]
pub async fn show_edit_product(
    product_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let product_id = match parse_product_id(product_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || show_product_service(product_id, &repo)).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "products", "Edit Product");
            context.insert("product", &data.product);
            context.insert("categories", &data.categories);
            render_template(&tera, "products/edit.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/products/edit/{product_id}")]
pub async fn update_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateProductForm>,
) -> impl Responder {
    let product_id = match parse_product_id(product_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let payload: ProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || update_product_service(product_id, payload, &repo)).await {
        Ok(()) => {
            FlashMessage::success("Product updated.").send();
            redirect("/products")
        }
        Err(err) => service_error_response(err),
    }
}

/// Served on both GET and POST; see `routes::configure`.
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = match parse_product_id(product_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || delete_product_service(product_id, &repo)).await {
        Ok(()) => {
            FlashMessage::success("Product deleted.").send();
            redirect("/products")
        }
        Err(err) => service_error_response(err),
    }
}
