use serde::{Deserialize, Serialize};

/// A job post. Created on first reference by title, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
}

/// A worker joined with their post title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub name: String,
    pub post: String,
    pub year: i32,
}
