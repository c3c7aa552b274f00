//! Shared types used across all modules.
//!
//! This module defines the core data structures for user records, field
//! input constraints, and the catalog of remote resources. Other modules
//! import from here rather than reaching into each other's internals.

pub mod field;
pub mod user;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use field::{FieldError, FieldKind, FieldSpec};
pub use user::{User, UserId};

/// Collections exposed by the mock service.
///
/// Only `users` is exercised by the interactive flows, but the client is
/// constructed against any of them since records are opaque JSON objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    #[default]
    Users,
    Posts,
    Comments,
    Albums,
    Photos,
    Todos,
}

impl Resource {
    /// URL path segment for this resource under the API base.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Albums => "albums",
            Resource::Photos => "photos",
            Resource::Todos => "todos",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "users" => Ok(Resource::Users),
            "posts" => Ok(Resource::Posts),
            "comments" => Ok(Resource::Comments),
            "albums" => Ok(Resource::Albums),
            "photos" => Ok(Resource::Photos),
            "todos" => Ok(Resource::Todos),
            other => Err(format!(
                "unsupported resource: '{other}'. Supported: users, posts, comments, \
                 albums, photos, todos"
            )),
        }
    }
}
