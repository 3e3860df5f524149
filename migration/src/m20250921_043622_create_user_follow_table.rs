use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserFollow {
    Table,
    FollowerId,
    FollowedId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so the same migration runs on sqlite
        m.create_table(
            Table::create()
                .table(UserFollow::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserFollow::FollowerId).integer().not_null())
                .col(ColumnDef::new(UserFollow::FollowedId).integer().not_null())
                .col(ColumnDef::new(UserFollow::CreatedAt).timestamp_with_time_zone().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_user_follow")
                        .col(UserFollow::FollowerId)
                        .col(UserFollow::FollowedId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_follow_follower")
                        .from(UserFollow::Table, UserFollow::FollowerId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_follow_followed")
                        .from(UserFollow::Table, UserFollow::FollowedId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // The PK already covers lookups by follower; followers-of-X needs this one.
        m.create_index(
            Index::create()
                .name("idx_user_follow_followed")
                .table(UserFollow::Table)
                .col(UserFollow::FollowedId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes implicitly with table
        m.drop_table(Table::drop().table(UserFollow::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
