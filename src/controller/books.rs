use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::{
    data::book::BookRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{
        api::MessageDto,
        book::{CreateBookParam, PaginatedBooksDto},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_book).get(get_books))
        .route("/user", get(get_user_books))
        .route("/{id}", delete(delete_book))
}

/// Request body for posting a book.
#[derive(Deserialize)]
pub struct CreateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> i64 {
    5
}

/// POST /api/books
///
/// Posts a new book recommendation owned by the authenticated user.
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateBookDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    if body.title.is_empty() || body.caption.is_empty() || body.image.is_empty() || body.rating == 0
    {
        return Err(AppError::BadRequest(
            "Please provide all fields".to_string(),
        ));
    }
    if !(1..=5).contains(&body.rating) {
        return Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ));
    }

    let book = BookRepository::new(&state.db)
        .create(CreateBookParam {
            title: body.title,
            caption: body.caption,
            image: body.image,
            rating: body.rating,
            user_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(book.into_dto())))
}

/// GET /api/books?page=&limit=
///
/// Newest-first feed of all books, paginated for infinite scrolling clients.
pub async fn get_books(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let page = query.page.max(1);
    let limit = query.limit.clamp(1, 100);

    let (books, total) = BookRepository::new(&state.db)
        .get_paginated(page, limit)
        .await?;

    Ok(Json(PaginatedBooksDto {
        books: books.into_iter().map(|book| book.into_dto()).collect(),
        current_page: page,
        total_books: total,
        total_pages: total.div_ceil(limit as u64),
    }))
}

/// GET /api/books/user
///
/// The authenticated user's own books, newest first.
pub async fn get_user_books(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let books = BookRepository::new(&state.db).get_by_user(&user.id).await?;

    Ok(Json(
        books
            .into_iter()
            .map(|book| book.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// DELETE /api/books/{id}
///
/// Deletes one of the authenticated user's books. Deleting someone else's
/// book is forbidden.
pub async fn delete_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens)
        .require(&headers)
        .await?;

    let book_id =
        ObjectId::parse_str(&id).map_err(|_| AppError::BadRequest("Invalid book id".to_string()))?;

    let book_repo = BookRepository::new(&state.db);

    let Some(book) = book_repo.find_by_id(&book_id).await? else {
        return Err(AppError::NotFound("Book not found".to_string()));
    };

    if book.user_id != user.id {
        return Err(AuthError::AccessDenied(user.id.to_hex()).into());
    }

    book_repo.delete(&book_id).await?;

    Ok(Json(MessageDto {
        message: "Book deleted successfully".to_string(),
    }))
}
