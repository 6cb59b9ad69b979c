//! # Mintpass Testkit
//!
//! Testing utilities for the redemption flow.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: deterministic collection/code/item setups for
//!   integration tests
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up a redemption scenario:
//!
//! ```rust
//! use mintpass_testkit::fixtures::RedemptionFixture;
//!
//! let fixture = RedemptionFixture::new();
//! let request = fixture.request();
//! let expected_hash = fixture.hash();
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mintpass_testkit::generators::{collection_config, item_id};
//!
//! proptest! {
//!     #[test]
//!     fn uri_is_deterministic(item in item_id(), config in collection_config()) {
//!         let a = mintpass_core::derive_uri(item, &config.cid);
//!         let b = mintpass_core::derive_uri(item, &config.cid);
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{other_config, sample_config, sample_metadata, RedemptionFixture};
