/// A registered user: the Discord id linked to a Linux login.
///
/// At most one record exists per `id`; registering the same id again
/// replaces the stored username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Discord user id, the primary key.
    pub id: i64,
    /// Login name of the account that registered.
    pub username: String,
}

impl User {
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
