use super::ContextExt;
use crate::domain::post::{self as domain_post, format_cursor};
use crate::domain::{self, PostMutationResponse as DomainMutationResponse};
use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject, ID};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Post {
    pub id: ID,
    pub title: String,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[ComplexObject]
impl Post {
    async fn text_snippet(&self) -> String {
        domain_post::snippet(&self.text)
    }

    /// Owner of the post, `null` if the user row no longer exists.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let author = ctx.post_service()?.find_author(self.user_id).await?;
        Ok(author.map(Into::into))
    }
}

impl From<domain::Post> for Post {
    fn from(value: domain::Post) -> Self {
        Self {
            id: ID(value.id.to_string()),
            title: value.title,
            text: value.text,
            user_id: value.user_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<domain::User> for User {
    fn from(value: domain::User) -> Self {
        Self {
            id: ID(value.id.to_string()),
            username: value.username,
            email: value.email,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PaginatedPosts {
    pub total_count: i64,
    /// `createdAt` of the last post on this page; pass it back to fetch older posts.
    pub cursor: Option<String>,
    pub has_more: bool,
    pub paginated_posts: Vec<Post>,
}

impl From<domain_post::PaginatedPosts> for PaginatedPosts {
    fn from(value: domain_post::PaginatedPosts) -> Self {
        Self {
            total_count: value.total_count,
            cursor: value.cursor.map(format_cursor),
            has_more: value.has_more,
            paginated_posts: value.posts.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, SimpleObject)]
pub struct PostMutationResponse {
    pub code: i32,
    pub success: bool,
    pub message: String,
    pub post: Option<Post>,
}

impl From<DomainMutationResponse> for PostMutationResponse {
    fn from(value: DomainMutationResponse) -> Self {
        Self {
            code: i32::from(value.code),
            success: value.success,
            message: value.message,
            post: value.post.map(Into::into),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub text: String,
}

impl From<CreatePostInput> for domain_post::CreatePostRequest {
    fn from(value: CreatePostInput) -> Self {
        Self {
            title: value.title,
            text: value.text,
        }
    }
}

#[derive(Debug, InputObject)]
pub struct UpdatePostInput {
    pub id: ID,
    pub title: String,
    pub text: String,
}
