//! Small pure helpers shared by the data and service layers.

pub mod slug;
pub mod tag_list;
