use crate::application::authorization::{ensure_owner, require_caller};
use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::post::{CreatePostRequest, PageQuery, PaginatedPosts, UpdatePostRequest};
use crate::domain::{DomainError, Post, PostMutationResponse, User};
use std::sync::Arc;

pub struct PostService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

impl PostService {
    pub fn new(
        post_repo: Arc<dyn PostRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }

    pub async fn create_post(
        &self,
        caller_id: Option<i64>,
        req: CreatePostRequest,
    ) -> PostMutationResponse {
        let result = self.try_create_post(caller_id, req).await;
        PostMutationResponse::from_result(result, "Post created successfully")
    }

    async fn try_create_post(
        &self,
        caller_id: Option<i64>,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let user_id = require_caller(caller_id)?;
        req.validate()?;

        let post = self.post_repo.create(user_id, req).await?;

        tracing::info!("Post created: id={}, user_id={}", post.id, user_id);

        Ok(post)
    }

    /// Returns `None` when the store fails or the cursor cannot be parsed.
    pub async fn get_posts(&self, limit: i64, cursor: Option<&str>) -> Option<PaginatedPosts> {
        let result = match PageQuery::new(limit, cursor) {
            Ok(query) => self.try_get_posts(query).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(page) => Some(page),
            Err(err) => {
                tracing::error!("Failed to list posts: {}", err);
                None
            }
        }
    }

    async fn try_get_posts(&self, query: PageQuery) -> Result<PaginatedPosts, DomainError> {
        let total_count = self.post_repo.count().await?;
        let posts = self.post_repo.find_page(query).await?;

        let Some(last) = posts.last() else {
            return Ok(PaginatedPosts::empty(total_count));
        };
        let cursor = last.created_at;

        let has_more = match query {
            PageQuery::Latest { .. } => posts.len() as i64 != total_count,
            PageQuery::Before { .. } => match self.post_repo.find_oldest().await? {
                Some(oldest) => cursor != oldest.created_at,
                None => false,
            },
        };

        tracing::debug!(
            "Listed {} posts (total={}, has_more={})",
            posts.len(),
            total_count,
            has_more
        );

        Ok(PaginatedPosts {
            total_count,
            cursor: Some(cursor),
            has_more,
            posts,
        })
    }

    /// Point lookup; absence and store failures both yield `None`.
    pub async fn get_post(&self, id: i64) -> Option<Post> {
        match self.post_repo.find_by_id(id).await {
            Ok(post) => Some(post),
            Err(DomainError::PostNotFound) => None,
            Err(err) => {
                tracing::error!("Failed to get post {}: {}", id, err);
                None
            }
        }
    }

    pub async fn update_post(
        &self,
        caller_id: Option<i64>,
        req: UpdatePostRequest,
    ) -> PostMutationResponse {
        let result = self.try_update_post(caller_id, req).await;
        PostMutationResponse::from_result(result, "Post updated successfully")
    }

    async fn try_update_post(
        &self,
        caller_id: Option<i64>,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        self.find_owned(req.id, caller_id, "update").await?;
        req.validate()?;

        let id = req.id;
        let updated_post = self.post_repo.update(req).await?;

        tracing::info!("Post updated: id={}, user_id={}", id, updated_post.user_id);

        Ok(updated_post)
    }

    pub async fn delete_post(&self, caller_id: Option<i64>, id: i64) -> PostMutationResponse {
        let result = self.try_delete_post(caller_id, id).await;
        PostMutationResponse::from_result(result, "Post deleted successfully")
    }

    async fn try_delete_post(&self, caller_id: Option<i64>, id: i64) -> Result<Post, DomainError> {
        let post = self.find_owned(id, caller_id, "delete").await?;

        self.post_repo.delete(id).await?;

        tracing::info!("Post deleted: id={}, user_id={}", id, post.user_id);

        Ok(post)
    }

    async fn find_owned(
        &self,
        id: i64,
        caller_id: Option<i64>,
        action: &str,
    ) -> Result<Post, DomainError> {
        let post = self.post_repo.find_by_id(id).await?;

        if let Err(err) = ensure_owner(post.user_id, caller_id) {
            tracing::warn!(
                "User {:?} attempted to {} post {} owned by {}",
                caller_id,
                action,
                id,
                post.user_id
            );
            return Err(err);
        }

        Ok(post)
    }

    pub async fn find_author(&self, user_id: i64) -> Result<Option<User>, DomainError> {
        self.user_repo.find_by_id(user_id).await
    }
}
