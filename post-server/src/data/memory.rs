//! In-memory repositories backing the service and schema tests.

use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::post::{CreatePostRequest, PageQuery, UpdatePostRequest};
use crate::domain::{DomainError, Post, User};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct PostState {
    posts: Vec<Post>,
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
    failing: bool,
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    inner: Mutex<PostState>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail like an unreachable database.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        let state = self.inner.lock().unwrap();
        state.posts.iter().find(|post| post.id == id).cloned()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, PostState>, DomainError> {
        let state = self.inner.lock().unwrap();
        if state.failing {
            return Err(DomainError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(state)
    }
}

/// Strictly increasing timestamps truncated to microseconds, like a
/// `timestamptz` column filled by `NOW()` in separate transactions.
fn next_timestamp(last: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = DateTime::from_timestamp_micros(Utc::now().timestamp_micros()).unwrap();
    match last {
        Some(last) if now <= last => last + Duration::microseconds(1),
        _ => now,
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, user_id: i64, req: CreatePostRequest) -> Result<Post, DomainError> {
        let mut state = self.lock()?;
        let created_at = next_timestamp(state.last_created_at);
        state.last_created_at = Some(created_at);
        state.next_id += 1;

        let post = Post {
            id: state.next_id,
            title: req.title,
            text: req.text,
            user_id,
            created_at,
            updated_at: created_at,
        };
        state.posts.push(post.clone());

        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Post, DomainError> {
        let state = self.lock()?;
        state
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(DomainError::PostNotFound)
    }

    async fn find_page(&self, query: PageQuery) -> Result<Vec<Post>, DomainError> {
        let state = self.lock()?;
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|post| query.cursor().map_or(true, |cursor| post.created_at < cursor))
            .cloned()
            .collect();

        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts.truncate(query.limit() as usize);

        Ok(posts)
    }

    async fn find_oldest(&self) -> Result<Option<Post>, DomainError> {
        let state = self.lock()?;
        Ok(state
            .posts
            .iter()
            .min_by_key(|post| (post.created_at, post.id))
            .cloned())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.lock()?.posts.len() as i64)
    }

    async fn update(&self, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let mut state = self.lock()?;
        let post = state
            .posts
            .iter_mut()
            .find(|post| post.id == req.id)
            .ok_or(DomainError::PostNotFound)?;

        post.title = req.title;
        post.text = req.text;
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut state = self.lock()?;
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);

        if state.posts.len() == before {
            Err(DomainError::PostNotFound)
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(names: &[(i64, &str)]) -> Self {
        let now = Utc::now();
        let users = names
            .iter()
            .map(|(id, username)| {
                let user = User {
                    id: *id,
                    username: username.to_string(),
                    email: format!("{}@example.com", username),
                    created_at: now,
                    updated_at: now,
                };
                (*id, user)
            })
            .collect();

        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}
