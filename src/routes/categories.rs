use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::CategoryId;
use crate::forms::categories::{
    AddCategoryForm, AddCategoryFormPayload, UpdateCategoryForm, UpdateCategoryFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, run_blocking, service_error_response};
use crate::services::ServiceError;
use crate::services::categories::{
    add_category as add_category_service, delete_category as delete_category_service,
    show_categories as show_categories_service, show_category as show_category_service,
    update_category as update_category_service,
};

fn parse_category_id(category_id: i32) -> Result<CategoryId, HttpResponse> {
    CategoryId::new(category_id).map_err(|e| HttpResponse::BadRequest().body(e.to_string()))
}

#[get("/categories")]
pub async fn show_categories(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    match run_blocking(move || show_categories_service(&repo)).await {
        Ok(categories) => {
            let mut context = base_context(&flash_messages, "categories", "Categories");
            context.insert("categories", &categories);
            render_template(&tera, "categories/index.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/categories/add")]
pub async fn show_add_category(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "categories", "Add Category");
    render_template(&tera, "categories/add.html", &context)
}

#[post("/categories/add")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || add_category_service(payload, &repo)).await {
        Ok(_) => {
            FlashMessage::success("Category added.").send();
            redirect("/categories")
        }
        Err(err) => service_error_response(err),
    }
}

#[get("/categories/edit/{category_id}")]
pub async fn show_edit_category(
    category_id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let category_id = match parse_category_id(category_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || show_category_service(category_id, &repo)).await {
        Ok(category) => {
            let mut context = base_context(&flash_messages, "categories", "Edit Category");
            context.insert("category", &category);
            render_template(&tera, "categories/edit.html", &context)
        }
        Err(err) => service_error_response(err),
    }
}

#[post("/categories/edit/{category_id}")]
pub async fn update_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateCategoryForm>,
) -> impl Responder {
    let category_id = match parse_category_id(category_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let payload: UpdateCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || update_category_service(category_id, payload, &repo)).await {
        Ok(()) => {
            FlashMessage::success("Category updated.").send();
            redirect("/categories")
        }
        Err(err) => service_error_response(err),
    }
}

/// Served on both GET and POST; see `routes::configure`.
pub async fn delete_category(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = match parse_category_id(category_id.into_inner()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let repo = repo.get_ref().clone();
    match run_blocking(move || delete_category_service(category_id, &repo)).await {
        Ok(()) => {
            FlashMessage::success("Category deleted.").send();
            redirect("/categories")
        }
        Err(err) => service_error_response(err),
    }
}
