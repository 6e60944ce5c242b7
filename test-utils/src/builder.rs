use entity::prelude::*;
use sea_orm::{
    sea_query::{ConditionalStatement, Expr, ExprTrait, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Group, User, UserGroup};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Group)
///     .with_table(UserGroup)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created once all tables exist.
    ///
    /// Entity-derived tables carry column-level `unique` constraints only, so
    /// partial and multi-column indexes from the migrations are added here.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user table with its partial unique index on active emails.
    pub fn with_user_table(self) -> Self {
        self.with_table(User).with_index(
            Index::create()
                .name("idx_users_active_email")
                .table(User)
                .col(entity::user::Column::Email)
                .unique()
                .and_where(Expr::col(entity::user::Column::DeletedAt).is_null())
                .to_owned(),
        )
    }

    /// Adds the user, group and user-group membership tables.
    pub fn with_group_tables(self) -> Self {
        self.with_user_table()
            .with_table(Group)
            .with_table(UserGroup)
    }

    /// Adds every table in the schema in dependency order.
    ///
    /// Use this when testing events, whose reads join users and groups, or when
    /// driving the full HTTP router.
    pub fn with_all_tables(self) -> Self {
        self.with_group_tables()
            .with_table(Event)
            .with_table(EventUser)
            .with_table(EventGroup)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database, tables and indexes ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
