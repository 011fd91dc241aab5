//! # SalesDesk Domain
//!
//! Domain entities for SalesDesk. This module contains the core
//! business concepts of the application.

pub mod entities;

pub use entities::*;
