pub mod graphql;
pub mod http_handlers;
pub mod session;
