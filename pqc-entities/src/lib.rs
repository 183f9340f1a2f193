#![deny(missing_debug_implementations)]

//! # pqc-entities
//!
//! Reusable, agnostic domain entities for ParañaqueConnect.
//!
//! The entities only carry data and generic helpers. Workflow rules,
//! authorization and validation live in `pqc-core`.

pub mod barangay;
pub mod category;
pub mod comment;
pub mod email;
pub mod geo;
pub mod id;
pub mod report;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
