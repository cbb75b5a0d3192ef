pub mod base;
pub mod security_service;

pub use security_service::submit_analysis;
