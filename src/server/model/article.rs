//! Article domain models and parameters.
//!
//! Provides the article domain model enriched with viewer-relative state (favorited,
//! author following), the listing filter, and the validated parameters for create and
//! update operations.

use chrono::{DateTime, Utc};

use crate::{
    model::article::{
        ArticleChangesDto, ArticleDto, MultipleArticlesDto, NewArticleDto, SingleArticleDto,
    },
    server::{error::AppError, model::user::Profile, util::tag_list},
};

/// Article with author profile and viewer-relative flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub favorites_count: i32,
    /// Whether the requesting user has favorited the article.
    pub favorited: bool,
    pub author_id: i32,
    pub author: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The article entity from the database
    /// - `author` - Author profile relative to the viewer
    /// - `favorited` - Whether the viewer has favorited the article
    pub fn from_entity(entity: entity::article::Model, author: Profile, favorited: bool) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            body: entity.body,
            tag_list: tag_list::decode(&entity.tag_list),
            favorites_count: entity.favorites_count,
            favorited,
            author_id: entity.author_id,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            slug: self.slug,
            title: self.title,
            description: self.description,
            body: self.body,
            tag_list: self.tag_list,
            created_at: self.created_at,
            updated_at: self.updated_at,
            favorited: self.favorited,
            favorites_count: self.favorites_count,
            author: self.author.into_dto(),
        }
    }

    /// Wraps the article in the `{article}` response envelope.
    pub fn into_single_dto(self) -> SingleArticleDto {
        SingleArticleDto {
            article: self.into_dto(),
        }
    }
}

/// One page of articles plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginatedArticles {
    pub articles: Vec<Article>,
    /// Matching articles ignoring limit and offset.
    pub total: u64,
}

impl PaginatedArticles {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps the page in the `{articles, articlesCount}` response envelope.
    pub fn into_dto(self) -> MultipleArticlesDto {
        MultipleArticlesDto {
            articles: self.articles.into_iter().map(Article::into_dto).collect(),
            articles_count: self.total,
        }
    }
}

/// Limit and offset applied to a listing; `None` means unbounded / from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Filters accepted by the public article listing, still expressed in usernames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilter {
    /// Substring matched against the stored tag list.
    pub tag: Option<String>,
    /// Username of the author.
    pub author: Option<String>,
    /// Username of a user whose favorites are listed.
    pub favorited: Option<String>,
    pub pagination: Pagination,
}

/// Article listing query with usernames resolved to ids.
///
/// `Some(vec![])` for an id set means nothing can match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQuery {
    pub tag: Option<String>,
    pub author_ids: Option<Vec<i32>>,
    pub article_ids: Option<Vec<i32>>,
    pub pagination: Pagination,
}

/// Validated input for creating an article.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateArticleParams {
    pub author_id: i32,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl CreateArticleParams {
    /// Validates the request DTO and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateArticleParams)` - Title, description and body present; tags storable
    /// - `Err(AppError::UnprocessableEntity)` - A field failed validation
    pub fn from_dto(author_id: i32, dto: NewArticleDto) -> Result<Self, AppError> {
        require_non_empty("title", &dto.title)?;
        require_non_empty("description", &dto.description)?;
        require_non_empty("body", &dto.body)?;

        let tag_list = dto.tag_list.unwrap_or_default();
        validate_tags(&tag_list)?;

        Ok(Self {
            author_id,
            title: dto.title,
            description: dto.description,
            body: dto.body,
            tag_list,
        })
    }
}

/// Validated shallow-merge update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateArticleParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl UpdateArticleParams {
    pub fn from_dto(dto: ArticleChangesDto) -> Result<Self, AppError> {
        if let Some(title) = &dto.title {
            require_non_empty("title", title)?;
        }
        if let Some(description) = &dto.description {
            require_non_empty("description", description)?;
        }
        if let Some(body) = &dto.body {
            require_non_empty("body", body)?;
        }
        if let Some(tags) = &dto.tag_list {
            validate_tags(tags)?;
        }

        Ok(Self {
            title: dto.title,
            description: dto.description,
            body: dto.body,
            tag_list: dto.tag_list,
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "{} can't be blank",
            field
        )));
    }

    Ok(())
}

fn validate_tags(tags: &[String]) -> Result<(), AppError> {
    if let Some(tag) = tags.iter().find(|tag| !tag_list::is_valid_tag(tag)) {
        return Err(AppError::UnprocessableEntity(format!(
            "tag '{}' must be non-empty and must not contain commas",
            tag
        )));
    }

    Ok(())
}
