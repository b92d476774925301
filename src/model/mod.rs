//! Data transfer objects exchanged over the HTTP API.
//!
//! Every request and response body lives here, wrapped in the envelopes clients expect
//! (`{article}`, `{articles, articlesCount}`, `{comment}`, `{profile}`, ...). Server-side
//! domain models convert into these types at the controller boundary.

pub mod api;
pub mod article;
pub mod comment;
pub mod profile;
pub mod tag;
pub mod user;
