use std::env;
use std::time::Duration;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::{Config, Environment, File};
use tera::Tera;

use pushkind_catalog::bootstrap::initialize_database;
use pushkind_catalog::db::{PoolSettings, establish_connection_pool};
use pushkind_catalog::models::config::ServerConfig;
use pushkind_catalog::repository::DieselRepository;
use pushkind_catalog::routes::{configure, flash_messages_framework};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

fn cookie_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) if secret.len() >= 64 => Key::from(secret.as_bytes()),
        _ => {
            log::warn!("No usable secret configured, generating a random cookie key");
            Key::generate()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool_settings = PoolSettings {
        max_size: server_config.pool.max_size,
        connection_timeout: Duration::from_secs(server_config.pool.connection_timeout_secs),
        ..PoolSettings::default()
    };

    let pool = match establish_connection_pool(&server_config.database_url, &pool_settings) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to open database '{}': {e}", server_config.database_url);
            std::process::exit(1);
        }
    };

    if let Err(e) = initialize_database(&pool) {
        log::error!("Failed to initialize database schema: {e}");
        std::process::exit(1);
    }

    let tera = match Tera::new(&format!("{}/**/*", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let key = cookie_key(server_config.secret.as_deref());
    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting server at http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(flash_messages_framework(key.clone()))
            .wrap(Logger::default())
            .service(Files::new("/assets", "./assets"))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
