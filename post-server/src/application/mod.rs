pub mod authorization;
pub mod post_service;

pub use post_service::PostService;
