//! The follow graph. Every write goes through `insert_edge` / `delete_edge`
//! on the single `user_follow` table, so "X follows Y" and "Y is followed by
//! X" can never disagree.

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::links::{Followers, Follows};
use entity::user::{Column as UserColumn, Model as UserModel};
use entity::user_follow::{ActiveModel as FollowActive, Column, Entity as UserFollow};
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

impl DbService {
    /// `follower_id` starts following `acting`.
    pub async fn add_follower(&self, acting: &UserModel, follower_id: i32) -> Result<(), AppError> {
        let follower = self.get_user_by_id(follower_id).await?;
        self.insert_edge(follower.id, acting.id).await
    }

    /// `follower_id` stops following `acting`. Missing edge is fine.
    pub async fn remove_follower(&self, acting: &UserModel, follower_id: i32) -> Result<(), AppError> {
        let follower = self.get_user_by_id(follower_id).await?;
        self.delete_edge(follower.id, acting.id).await
    }

    /// `acting` starts following `followed_id`.
    pub async fn add_followed(&self, acting: &UserModel, followed_id: i32) -> Result<(), AppError> {
        let followed = self.get_user_by_id(followed_id).await?;
        self.insert_edge(acting.id, followed.id).await
    }

    pub async fn get_followers(&self, user_id: i32) -> Result<Vec<UserModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .find_linked(Followers)
            .order_by_asc(UserColumn::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_follows(&self, user_id: i32) -> Result<Vec<UserModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .find_linked(Follows)
            .order_by_asc(UserColumn::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn is_following(&self, follower_id: i32, followed_id: i32) -> Result<bool, AppError> {
        Ok(UserFollow::find()
            .filter(Column::FollowerId.eq(follower_id))
            .filter(Column::FollowedId.eq(followed_id))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    async fn insert_edge(&self, follower_id: i32, followed_id: i32) -> Result<(), AppError> {
        // ON CONFLICT DO NOTHING keeps re-adding an edge a no-op, even under races
        let inserted = UserFollow::insert(FollowActive {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([Column::FollowerId, Column::FollowedId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.database_connection)
        .await?;

        if inserted > 0 {
            info!(follower_id, followed_id, "follow edge added");
        }
        Ok(())
    }

    async fn delete_edge(&self, follower_id: i32, followed_id: i32) -> Result<(), AppError> {
        let res = UserFollow::delete_many()
            .filter(Column::FollowerId.eq(follower_id))
            .filter(Column::FollowedId.eq(followed_id))
            .exec(&self.database_connection)
            .await?;

        if res.rows_affected > 0 {
            info!(follower_id, followed_id, "follow edge removed");
        }
        Ok(())
    }
}
