use super::types::{PaginatedPosts, Post};
use super::ContextExt;
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// Newest posts first, at most ten per page. Pass the returned `cursor`
    /// to fetch the next, older page.
    async fn get_posts(
        &self,
        ctx: &Context<'_>,
        limit: i32,
        cursor: Option<String>,
    ) -> Result<Option<PaginatedPosts>> {
        let page = ctx
            .post_service()?
            .get_posts(i64::from(limit), cursor.as_deref())
            .await;

        Ok(page.map(Into::into))
    }

    async fn get_post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };

        Ok(ctx.post_service()?.get_post(id).await.map(Into::into))
    }
}
