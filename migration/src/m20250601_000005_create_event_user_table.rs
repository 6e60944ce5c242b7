use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_user_table::User;
use super::m20250601_000003_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventUser::Table)
                    .if_not_exists()
                    .col(integer(EventUser::EventId))
                    .col(integer(EventUser::UserId))
                    .primary_key(
                        Index::create()
                            .name("pk_event_users")
                            .col(EventUser::EventId)
                            .col(EventUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_users_event_id")
                            .from(EventUser::Table, EventUser::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_users_user_id")
                            .from(EventUser::Table, EventUser::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventUser {
    #[sea_orm(iden = "event_users")]
    Table,
    EventId,
    UserId,
}
