//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! Each service is generic over the store trait of its repository so the business
//! rules can run against any backing store:
//!
//! - **Validation beyond shape**: duplicate emails and group names, event date parsing
//! - **Secrets**: password hashing before anything is persisted
//! - **Orchestration**: re-reading freshly created events with their relations

pub mod event;
pub mod group;
pub mod user;
