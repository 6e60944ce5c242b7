use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date: DateTimeUtc,
    pub location: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_user::Entity")]
    EventUser,
    #[sea_orm(has_many = "super::event_group::Entity")]
    EventGroup,
}

impl Related<super::event_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventUser.def()
    }
}

impl Related<super::event_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGroup.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_user::Relation::Event.def().rev())
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_group::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
