use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::data::post_repository::{
    NewPost, Pagination, PostOrdering, PostPatch, PostRepository, SearchFilter, SortDirection,
    SortField,
};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

/// Posts in insertion order plus the next id to hand out. The counter only
/// moves forward, so ids are never reused after a delete.
struct PostArena {
    posts: Vec<Post>,
    next_id: i64,
}

/// In-memory post store. All state lives behind a single `RwLock`:
/// mutations hold the write lock across the whole read-modify-write,
/// reads work on a snapshot under the read lock.
pub struct InMemoryPostRepository {
    inner: RwLock<PostArena>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(PostArena {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Starts from a known collection, continuing ids after the largest one.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(PostArena { posts, next_id }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut arena = self.inner.write().await;
        let post = Post {
            id: arena.next_id,
            title: input.title,
            content: input.content,
            author: input.author,
            date: input.date,
        };
        arena.next_id += 1;
        arena.posts.push(post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let mut arena = self.inner.write().await;
        let Some(post) = arena.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        if let Some(date) = patch.date {
            post.date = date;
        }

        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut arena = self.inner.write().await;
        match arena.posts.iter().position(|post| post.id == id) {
            Some(index) => {
                arena.posts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_posts(
        &self,
        ordering: Option<PostOrdering>,
        pagination: Pagination,
    ) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.inner.read().await.posts.clone();

        if let Some(ordering) = ordering {
            // sort_by is stable: equal keys stay in insertion order.
            posts.sort_by(|a, b| {
                compare(
                    sort_key(a, ordering.field),
                    sort_key(b, ordering.field),
                    ordering.direction,
                )
            });
        }

        let start = (pagination.page.saturating_sub(1) as usize)
            .saturating_mul(pagination.per_page as usize);
        Ok(posts
            .into_iter()
            .skip(start)
            .take(pagination.per_page as usize)
            .collect())
    }

    async fn search_posts(&self, filter: SearchFilter) -> Result<Vec<Post>, DomainError> {
        let posts = self.inner.read().await.posts.clone();
        let title = filter.title.map(|q| q.to_lowercase());
        let content = filter.content.map(|q| q.to_lowercase());
        let author = filter.author.map(|q| q.to_lowercase());

        Ok(posts
            .into_iter()
            .filter(|post| {
                title
                    .as_deref()
                    .is_none_or(|q| post.title.to_lowercase().contains(q))
                    && content
                        .as_deref()
                        .is_none_or(|q| post.content.to_lowercase().contains(q))
                    && author
                        .as_deref()
                        .is_none_or(|q| post.author.to_lowercase().contains(q))
                    // the date filter is a plain substring match, case-sensitive
                    && filter.date.as_deref().is_none_or(|q| post.date.contains(q))
            })
            .collect())
    }
}

fn sort_key(post: &Post, field: SortField) -> &str {
    match field {
        SortField::Title => &post.title,
        SortField::Content => &post.content,
        SortField::Author => &post.author,
        SortField::Date => &post.date,
    }
}

fn compare(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    }
}
