use super::types::{CreatePostInput, PostMutationResponse, UpdatePostInput};
use super::{AuthGuard, ContextExt};
use crate::domain::post::UpdatePostRequest;
use crate::domain::{DomainError, PostMutationResponse as DomainMutationResponse};
use async_graphql::{Context, Object, Result, ID};

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        create_post_input: CreatePostInput,
    ) -> Result<PostMutationResponse> {
        let response = ctx
            .post_service()?
            .create_post(ctx.session().user_id, create_post_input.into())
            .await;

        Ok(response.into())
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        update_post_input: UpdatePostInput,
    ) -> Result<PostMutationResponse> {
        let service = ctx.post_service()?;
        let Ok(id) = update_post_input.id.parse::<i64>() else {
            return Ok(DomainMutationResponse::from_error(DomainError::PostNotFound).into());
        };

        let req = UpdatePostRequest {
            id,
            title: update_post_input.title,
            text: update_post_input.text,
        };
        let response = service.update_post(ctx.session().user_id, req).await;

        Ok(response.into())
    }

    #[graphql(guard = "AuthGuard")]
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<PostMutationResponse> {
        let service = ctx.post_service()?;
        let Ok(id) = id.parse::<i64>() else {
            return Ok(DomainMutationResponse::from_error(DomainError::PostNotFound).into());
        };

        let response = service.delete_post(ctx.session().user_id, id).await;

        Ok(response.into())
    }
}
