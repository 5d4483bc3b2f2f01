//! Portfolio catalog: projects and the site owner's profile

pub mod ports;
pub mod service;

pub use service::CatalogService;
