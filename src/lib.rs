//! Core library exports for the Catalog service.
//!
//! This crate exposes the domain, persistence, forms, routes and service
//! layers used by the Catalog web application: a server-rendered CRUD front
//! end for categories and the products filed under them.

#[cfg(feature = "data")]
pub mod bootstrap;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
