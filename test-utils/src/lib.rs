//! Roster Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the roster
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with unique default values
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_roster_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let group = factory::create_group(db).await?;
//!     let student = factory::student::StudentFactory::new(db)
//!         .group_id(group.id)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
