//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let group = factory::create_group(&db).await?;
//! let student = factory::create_student(&db).await?;
//! let (group, members) = factory::helpers::create_group_with_students(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Bob")
//!     .age(10)
//!     .group_id(group.id)
//!     .build()
//!     .await?;
//! ```

pub mod group;
pub mod helpers;
pub mod student;

pub use group::create_group;
pub use student::create_student;
