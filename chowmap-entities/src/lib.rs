#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # chowmap-entities
//!
//! Reusable, agnostic domain entities for chowmap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod id;
pub mod overlay;
pub mod place;
pub mod price;
pub mod query;
pub mod rating;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
