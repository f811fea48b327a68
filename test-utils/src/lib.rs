//! Gira Test Utils
//!
//! Shared testing utilities for the Gira gateway. The gateway holds no data of its own, so
//! instead of a database this crate provides scripted stand-ins for the two backend
//! services: real TCP servers speaking the gateway's wire protocol whose replies are
//! decided per command by a [`backend::Script`].
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which mock backends a test needs
//! - **TestContext**: Running mock backends for one test
//! - **MockBackend**: Scripted backend recording every request it receives
//! - **factory**: Backend record builders with unique ids
//! - **fixture**: Request bodies and credentials for HTTP-level tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use protocol::Command;
//! use test_utils::{backend::{Script, Step}, builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_user() -> Result<(), TestError> {
//!     let user = factory::user::create_user();
//!     let test = TestBuilder::new()
//!         .with_data_service(Script::new().on(Command::FindUser, Step::found(&user)))
//!         .build()
//!         .await?;
//!
//!     let backend = test.data()?;
//!     // Point the gateway at backend.host()/backend.port()...
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
