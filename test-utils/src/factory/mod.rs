//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let group = factory::group::create_group(&db).await?;
//!     factory::helpers::add_user_to_group(&db, group.id, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice123")
//!     .email("alice@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod group;
pub mod helpers;
pub mod user;

pub use event::create_event;
pub use group::create_group;
pub use user::create_user;
