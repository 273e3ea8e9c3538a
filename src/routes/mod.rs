use actix_web::cookie::Key;
use actix_web::http::header;
use actix_web::{HttpResponse, error, web};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::{FlashMessagesFramework, IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::services::{ServiceError, ServiceResult};

pub mod categories;
pub mod main;
pub mod products;

/// Render `template` or answer 500 if rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().body("Server Error")
        }
    }
}

/// Post/redirect/get response pointing at `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    title: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("title", title);
    context
}

/// Map a service failure onto the client-facing response.
///
/// Details have already been logged by the service; only a generic message
/// leaves the server for internal errors.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().body("Not found"),
        ServiceError::Form(message) => HttpResponse::BadRequest().body(message),
        ServiceError::Internal => HttpResponse::InternalServerError().body("Server Error"),
    }
}

/// Run a synchronous service call on the blocking thread pool.
///
/// Diesel connections are blocking; this keeps a slow query from stalling the
/// worker that drives other requests.
pub async fn run_blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    match web::block(f).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Flash message middleware backed by a signed cookie.
pub fn flash_messages_framework(key: Key) -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(key).build();
    FlashMessagesFramework::builder(store).build()
}

/// Register every route of the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| error::ErrorBadRequest(format!("Invalid id: {err}"))),
    )
    .service(main::index)
    .service(categories::show_categories)
    .service(categories::show_add_category)
    .service(categories::add_category)
    .service(categories::show_edit_category)
    .service(categories::update_category)
    .service(
        web::resource("/categories/delete/{category_id}")
            .route(web::get().to(categories::delete_category))
            .route(web::post().to(categories::delete_category)),
    )
    .service(products::show_products)
    .service(products::show_add_product)
    .service(products::add_product)
    .service(products::show_edit_product)
    .service(products::update_product)
    .service(
        web::resource("/products/delete/{product_id}")
            .route(web::get().to(products::delete_product))
            .route(web::post().to(products::delete_product)),
    );
}
