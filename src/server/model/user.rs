//! User and profile domain models.

use crate::{
    model::{
        profile::ProfileDto,
        user::{UserChangesDto, UserDto},
    },
    server::error::AppError,
};

/// Authenticated user as exposed by `GET /user`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub image: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The password hash is dropped here and never leaves the data layer.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            bio: entity.bio,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            email: self.email,
            bio: self.bio,
            image: self.image,
        }
    }
}

/// Validated changes to the current user. Username and email may not be blanked, while
/// bio and image accept any string including an empty one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UserChangesDto) -> Result<Self, AppError> {
        for (field, value) in [("username", &dto.username), ("email", &dto.email)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(AppError::UnprocessableEntity(format!(
                    "{} can't be blank",
                    field
                )));
            }
        }

        Ok(Self {
            username: dto.username,
            email: dto.email,
            bio: dto.bio,
            image: dto.image,
        })
    }
}

/// Public view of a user relative to the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub username: String,
    pub bio: String,
    pub image: String,
    /// Whether the requesting user follows this user; false for anonymous viewers.
    pub following: bool,
}

impl Profile {
    /// Builds a profile from the user entity and the viewer's follow state.
    pub fn from_entity(entity: &entity::user::Model, following: bool) -> Self {
        Self {
            username: entity.username.clone(),
            bio: entity.bio.clone(),
            image: entity.image.clone(),
            following,
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            username: self.username,
            bio: self.bio,
            image: self.image,
            following: self.following,
        }
    }
}
