//! Sign-in and sign-out across the two credential backends

pub mod ports;
pub mod service;

pub use service::AuthService;
