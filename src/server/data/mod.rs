//! Database repository layer for all domain entities.
//!
//! Each repository holds a borrowed connection and implements the store trait its
//! service is generic over. Repositories use SeaORM entity models internally and
//! return domain models, signalling missing rows with `DbErr::RecordNotFound`.

pub mod event;
pub mod group;
pub mod user;
