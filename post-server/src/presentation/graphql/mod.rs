use self::{mutation::PostMutation, query::PostQuery};
use crate::application::PostService;
use crate::presentation::session::Session;
use async_graphql::{extensions::Tracing, Context, EmptySubscription, Guard, Result, Schema};
use std::sync::Arc;

mod mutation;
mod query;
mod types;

pub type AppSchema = Schema<PostQuery, PostMutation, EmptySubscription>;

pub trait ContextExt {
    fn post_service(&self) -> Result<&Arc<PostService>>;
    fn session(&self) -> Session;
}

impl ContextExt for Context<'_> {
    fn post_service(&self) -> Result<&Arc<PostService>> {
        self.data::<Arc<PostService>>()
    }

    fn session(&self) -> Session {
        self.data_opt::<Session>().copied().unwrap_or_default()
    }
}

/// Rejects the field unless the request carries an authenticated session.
pub struct AuthGuard;

impl Guard for AuthGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        if ctx.session().user_id.is_some() {
            Ok(())
        } else {
            Err("Not authenticated to perform GraphQL operations".into())
        }
    }
}

pub fn build_schema(post_service: Arc<PostService>) -> AppSchema {
    Schema::build(
        PostQuery::default(),
        PostMutation::default(),
        EmptySubscription,
    )
    .data(post_service)
    .extension(Tracing)
    .finish()
}
