//! Factory methods for creating backend records.
//!
//! Records are what the mock data service hands back to the gateway. Each factory fills in
//! sensible defaults with a unique id and lets tests override only what they assert on.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user();
//!
//! // Customize
//! let issue = factory::issue::IssueFactory::new()
//!     .project_id(3)
//!     .with_user(user.clone())
//!     .build();
//! ```

pub mod comment;
pub mod helpers;
pub mod issue;
pub mod project;
pub mod user;
