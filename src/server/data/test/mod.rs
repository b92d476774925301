mod article;
mod comment;
mod favorite;
mod follow;
mod tag;
mod user;
