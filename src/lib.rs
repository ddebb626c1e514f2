pub mod acl;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod persistence;
pub mod services;
pub mod transform;
