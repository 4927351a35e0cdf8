//! API exposure
//!
//! Turns the registered entity routes into the served HTTP router.

pub mod rest;

pub use rest::RestExposure;
