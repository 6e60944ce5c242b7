use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_group_table::Group;
use super::m20250601_000003_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventGroup::Table)
                    .if_not_exists()
                    .col(integer(EventGroup::EventId))
                    .col(integer(EventGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .name("pk_event_groups")
                            .col(EventGroup::EventId)
                            .col(EventGroup::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_groups_event_id")
                            .from(EventGroup::Table, EventGroup::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_groups_group_id")
                            .from(EventGroup::Table, EventGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventGroup {
    #[sea_orm(iden = "event_groups")]
    Table,
    EventId,
    GroupId,
}
