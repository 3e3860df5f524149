use crate::db::db_service::DbService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, UserSummary},
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    SqlErr,
};

impl DbService {
    pub async fn user_exists(&self, email: &str, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email).or(Column::Username.eq(username)))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    /// Every user, read as the four listing columns only.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(User::find()
            .select_only()
            .columns([Column::Id, Column::Email, Column::Firstname, Column::Lastname])
            .order_by_asc(Column::Id)
            .into_model::<UserSummary>()
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Unable to find user with id {id}")))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Unable to find user with username {username}")))?)
    }

    /// Account creation seam. Not exposed over HTTP.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if self.user_exists(&payload.email, &payload.username).await? {
            return Err(AppError::AlreadyExists);
        }
        self.insert_user(payload).await
    }

    // The unique indexes still decide when two creations race past the check.
    pub(crate) async fn insert_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        let now = Utc::now();

        match User::insert(UserActive {
            email: Set(payload.email),
            firstname: Set(payload.firstname),
            lastname: Set(payload.lastname),
            username: Set(payload.username),
            password: Set(payload.password_hash),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await
        {
            Ok(res) => Ok(res.last_insert_id),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::AlreadyExists),
                _ => Err(err.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, username: &str) -> DBUserCreate {
        DBUserCreate {
            email: email.to_string(),
            firstname: "Sam".to_string(),
            lastname: "Dup".to_string(),
            username: username.to_string(),
            password_hash: "unused".to_string(),
        }
    }

    #[actix_web::test]
    async fn duplicate_insert_is_already_exists() {
        let db = DbService::new("sqlite::memory:").await.expect("Failed to open sqlite");

        db.insert_user(payload("sam@example.com", "sam")).await.unwrap();

        // skips the existence check, like a racing second request would
        for dup in [payload("sam@example.com", "other"), payload("other@example.com", "sam")] {
            match db.insert_user(dup).await {
                Err(AppError::AlreadyExists) => {}
                other => panic!("expected AlreadyExists, got {other:?}"),
            }
        }
        assert_eq!(db.list_users().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn create_user_rejects_taken_username() {
        let db = DbService::new("sqlite::memory:").await.expect("Failed to open sqlite");

        db.create_user(payload("sam@example.com", "sam")).await.unwrap();
        let err = db.create_user(payload("new@example.com", "sam")).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists));
    }
}
