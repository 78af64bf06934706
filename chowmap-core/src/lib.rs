#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # chowmap-core
//!
//! The catalog query pipeline and the storage/gateway traits it
//! runs against. Everything in here is agnostic of how places are
//! persisted and rendered.

pub mod entities {
    pub use chowmap_entities::{
        geo::*, id::*, overlay::*, place::*, price::*, query::*, rating::*,
    };
}

pub mod gateways;
pub mod repositories;
pub mod text;
pub mod usecases;
