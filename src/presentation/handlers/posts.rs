use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::application::blog_service::ListPostsQuery;
use crate::data::post_repository::SearchFilter;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::handlers::auth::MessageDto;
use crate::presentation::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize)]
pub struct ListQueryDto {
    pub sort: Option<String>,
    pub direction: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct CreatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQueryDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            date: post.date,
        }
    }
}

pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<ListQueryDto>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state
        .blog_service
        .list_posts(ListPostsQuery {
            sort: query.sort,
            direction: query.direction,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

pub async fn create_post(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(dto): Json<CreatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
        author: dto.author,
        date: dto.date,
    };

    let post = state.blog_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

pub async fn update_post(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(dto): Json<UpdatePostDto>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let req = UpdatePostRequest {
        title: dto.title,
        content: dto.content,
        author: dto.author,
        date: dto.date,
    };

    let post = state.blog_service.update_post(id, req).await?;
    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

pub async fn delete_post(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<MessageDto>)> {
    state.blog_service.delete_post(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Post with id {id} has been deleted successfully."),
        }),
    ))
}

pub async fn search_posts(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<SearchQueryDto>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state
        .blog_service
        .search_posts(SearchFilter {
            title: query.title,
            content: query.content,
            author: query.author,
            date: query.date,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}
