//! Core business logic for Cotiza.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `budget` - Budget aggregation (subtotal, IVA, grand total)
//! - `document` - Printable document tree assembly
//! - `auth` - Password hashing
//! - `storage` - Company logo asset storage

pub mod auth;
pub mod budget;
pub mod document;
pub mod storage;
