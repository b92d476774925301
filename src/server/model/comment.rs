//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, MultipleCommentsDto, NewCommentDto, SingleCommentDto},
    server::{error::AppError, model::user::Profile},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub article_id: i32,
    pub author_id: i32,
    pub author: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model, author: Profile) -> Self {
        Self {
            id: entity.id,
            body: entity.body,
            article_id: entity.article_id,
            author_id: entity.author_id,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            body: self.body,
            author: self.author.into_dto(),
        }
    }

    /// Wraps the comment in the `{comment}` response envelope.
    pub fn into_single_dto(self) -> SingleCommentDto {
        SingleCommentDto {
            comment: self.into_dto(),
        }
    }

    /// Wraps comments in the `{comments}` response envelope, keeping their order.
    pub fn into_multiple_dto(comments: Vec<Comment>) -> MultipleCommentsDto {
        MultipleCommentsDto {
            comments: comments.into_iter().map(Comment::into_dto).collect(),
        }
    }
}

/// Validated input for creating a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParams {
    pub author_id: i32,
    pub body: String,
}

impl CreateCommentParams {
    pub fn from_dto(author_id: i32, dto: NewCommentDto) -> Result<Self, AppError> {
        if dto.body.trim().is_empty() {
            return Err(AppError::UnprocessableEntity(
                "body can't be blank".to_string(),
            ));
        }

        Ok(Self {
            author_id,
            body: dto.body,
        })
    }
}
