//! Typed lookup key for operations addressable by id or by name.
//!
//! Styles and authors can be reached through either their numeric id or
//! their unique name. Routes expose the two forms under distinct path
//! segments and hand the store a single [`EntityKey`], so no operation has
//! to guess whether `"1917"` is an id or a name.

use std::fmt;

use crate::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    Id(DbId),
    Name(String),
}

impl EntityKey {
    pub fn id(&self) -> Option<DbId> {
        match self {
            EntityKey::Id(id) => Some(*id),
            EntityKey::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            EntityKey::Id(_) => None,
            EntityKey::Name(name) => Some(name),
        }
    }
}

impl From<DbId> for EntityKey {
    fn from(id: DbId) -> Self {
        EntityKey::Id(id)
    }
}

impl From<String> for EntityKey {
    fn from(name: String) -> Self {
        EntityKey::Name(name)
    }
}

impl From<&str> for EntityKey {
    fn from(name: &str) -> Self {
        EntityKey::Name(name.to_string())
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Id(id) => write!(f, "id {id}"),
            EntityKey::Name(name) => write!(f, "name '{name}'"),
        }
    }
}
