use crate::data::post_repository::{
    NewPost, Pagination, PostOrdering, PostPatch, PostRepository, SearchFilter, SortDirection,
    SortField,
};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};

#[derive(Debug, Clone)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

pub struct BlogService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> BlogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let draft = req.validate()?;

        self.repo
            .create_post(NewPost {
                title: draft.title,
                content: draft.content,
                author: draft.author,
                date: draft.date,
            })
            .await
    }

    /// Overwrites only the provided fields. The date is deliberately not
    /// format-checked here; only create validates it.
    pub async fn update_post(
        &self,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let patch = PostPatch {
            title: req.title,
            content: req.content,
            author: req.author,
            date: req.date,
        };
        self.repo
            .update_post(post_id, patch)
            .await?
            .ok_or(DomainError::NotFound)
    }

    pub async fn delete_post(&self, post_id: i64) -> Result<(), DomainError> {
        let deleted = self.repo.delete_post(post_id).await?;
        if !deleted {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    pub async fn list_posts(&self, query: ListPostsQuery) -> Result<Vec<Post>, DomainError> {
        let ordering = match query.sort.as_deref() {
            Some(field) => {
                let field = SortField::parse(field).ok_or_else(|| {
                    DomainError::Validation(
                        "Invalid sort field. Must be 'title', 'content', 'author', or 'date'."
                            .to_string(),
                    )
                })?;
                let direction = match query.direction.as_deref() {
                    Some(direction) => SortDirection::parse(direction).ok_or_else(|| {
                        DomainError::Validation(
                            "Invalid sort direction. Must be 'asc' or 'desc'.".to_string(),
                        )
                    })?,
                    None => SortDirection::Asc,
                };
                Some(PostOrdering { field, direction })
            }
            // without a sort field the direction parameter is ignored
            None => None,
        };

        self.repo
            .list_posts(
                ordering,
                Pagination {
                    page: query.page,
                    per_page: query.per_page,
                },
            )
            .await
    }

    pub async fn search_posts(&self, filter: SearchFilter) -> Result<Vec<Post>, DomainError> {
        self.repo.search_posts(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::{BlogService, ListPostsQuery};
    use crate::data::post_repository::SearchFilter;
    use crate::data::repositories::memory::InMemoryPostRepository;
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, UpdatePostRequest};

    fn service() -> BlogService<InMemoryPostRepository> {
        BlogService::new(InMemoryPostRepository::new())
    }

    fn create_request(title: &str, author: &str, date: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: Some(title.to_string()),
            content: Some(format!("{title} body")),
            author: Some(author.to_string()),
            date: Some(date.to_string()),
        }
    }

    fn list_query(sort: Option<&str>, direction: Option<&str>) -> ListPostsQuery {
        ListPostsQuery {
            sort: sort.map(str::to_string),
            direction: direction.map(str::to_string),
            page: 1,
            per_page: 10,
        }
    }

    #[tokio::test]
    async fn create_post_assigns_increasing_ids() {
        let service = service();
        let first = service
            .create_post(create_request("First", "Author One", "2023-01-01"))
            .await
            .expect("create must succeed");
        let second = service
            .create_post(create_request("Second", "Author Two", "2023-02-01"))
            .await
            .expect("create must succeed");

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn create_post_rejects_invalid_date() {
        let service = service();
        let err = service
            .create_post(create_request("First", "Author One", "2023-13-01"))
            .await
            .expect_err("month 13 must be rejected");
        assert!(matches!(err, DomainError::Validation(msg)
            if msg == "Invalid date format. Use YYYY-MM-DD."));
    }

    #[tokio::test]
    async fn list_posts_rejects_unknown_sort_field() {
        let service = service();
        let err = service
            .list_posts(list_query(Some("id"), None))
            .await
            .expect_err("sort by id is not allowed");
        assert!(matches!(err, DomainError::Validation(msg)
            if msg == "Invalid sort field. Must be 'title', 'content', 'author', or 'date'."));
    }

    #[tokio::test]
    async fn list_posts_rejects_unknown_direction() {
        let service = service();
        let err = service
            .list_posts(list_query(Some("title"), Some("sideways")))
            .await
            .expect_err("direction must be asc or desc");
        assert!(matches!(err, DomainError::Validation(msg)
            if msg == "Invalid sort direction. Must be 'asc' or 'desc'."));
    }

    #[tokio::test]
    async fn list_posts_defaults_to_ascending_direction() {
        let service = service();
        for title in ["Banana", "Apple"] {
            service
                .create_post(create_request(title, "Author One", "2023-01-01"))
                .await
                .expect("create must succeed");
        }

        let posts = service
            .list_posts(list_query(Some("title"), None))
            .await
            .expect("list must succeed");
        let titles: Vec<_> = posts.iter().map(|post| post.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "Banana"]);
    }

    #[tokio::test]
    async fn list_posts_ignores_direction_without_sort() {
        let service = service();
        service
            .create_post(create_request("Only", "Author One", "2023-01-01"))
            .await
            .expect("create must succeed");

        let posts = service
            .list_posts(list_query(None, Some("sideways")))
            .await
            .expect("direction alone must not fail the request");
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn update_post_returns_not_found_for_unknown_id() {
        let service = service();
        let err = service
            .update_post(42, UpdatePostRequest::default())
            .await
            .expect_err("unknown id must fail");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[tokio::test]
    async fn update_post_accepts_malformed_date() {
        let service = service();
        let created = service
            .create_post(create_request("First", "Author One", "2023-01-01"))
            .await
            .expect("create must succeed");

        let updated = service
            .update_post(
                created.id,
                UpdatePostRequest {
                    date: Some("not-a-date".to_string()),
                    ..UpdatePostRequest::default()
                },
            )
            .await
            .expect("update does not validate the date");
        assert_eq!(updated.date, "not-a-date");
    }

    #[tokio::test]
    async fn delete_post_returns_not_found_for_unknown_id() {
        let service = service();
        let err = service
            .delete_post(42)
            .await
            .expect_err("unknown id must fail");
        assert!(matches!(err, DomainError::NotFound));
    }

    #[tokio::test]
    async fn search_posts_passes_filters_through() {
        let service = service();
        service
            .create_post(create_request("First", "Author One", "2023-01-01"))
            .await
            .expect("create must succeed");
        service
            .create_post(create_request("Second", "Author Two", "2023-02-01"))
            .await
            .expect("create must succeed");

        let found = service
            .search_posts(SearchFilter {
                author: Some("one".to_string()),
                ..SearchFilter::default()
            })
            .await
            .expect("search must succeed");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Author One");
    }
}
