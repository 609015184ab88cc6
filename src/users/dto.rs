use serde::Serialize;
use time::OffsetDateTime;

use crate::convert::UserId;
use crate::users::repo::User;

/// Public part of the user returned to clients, without the password hash.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub is_auth: bool,
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            is_auth: u.is_auth,
            created_at: u.created_at,
        }
    }
}

/// Account counters for the admin dashboard.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub total: i64,
    pub authorized: i64,
    pub unauthorized: i64,
    #[serde(rename = "new")]
    pub new_users: i64,
    pub deleted: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialize_with_new_key() {
        let stats = UserStats {
            total: 5,
            authorized: 2,
            unauthorized: 3,
            new_users: 1,
            deleted: 0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""new":1"#));
        assert!(json.contains(r#""total":5"#));
    }
}
