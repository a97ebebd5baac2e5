pub mod error;
pub mod post;
pub mod response;
pub mod user;

pub use error::DomainError;
pub use post::Post;
pub use response::PostMutationResponse;
pub use user::User;
