//! User domain entity

/// Identifier assigned to a [`User`] by the entity store
pub type UserId = u64;

/// A registered customer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
