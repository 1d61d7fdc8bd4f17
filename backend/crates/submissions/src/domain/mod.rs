//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Submission)
//! - Domain value objects (SubmissionStatus)
//! - Domain services (slug and identity derivation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod services;
pub mod repository;
pub mod value_objects;
