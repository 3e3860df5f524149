use entity::user::Model as UserModel;
use sea_orm::FromQueryResult;
use serde::Serialize;

/// Row of the public `/users` listing. Selected column by column, so nothing
/// outside these four fields is ever read for it.
#[derive(Serialize, Debug, Clone, PartialEq, FromQueryResult)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// The "api" view of a user: detail endpoint, follow lists and login payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserApi {
    pub id: i32,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

impl From<UserModel> for UserApi {
    fn from(m: UserModel) -> Self {
        Self {
            id: m.id,
            email: m.email,
            firstname: m.firstname,
            lastname: m.lastname,
            username: m.username,
        }
    }
}

pub struct DBUserCreate {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub password_hash: String,
}
