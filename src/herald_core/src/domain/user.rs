use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::email::Email;

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Uuid,
    email: Email,
    name: String,
    registered_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name: name.into(),
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}
