//! Skin Market library
//!
//! This crate implements the core of a minimal digital-asset marketplace:
//! a registry that mints unique, non-fungible asset records and an exchange
//! engine that transfers ownership atomically against payment.
//!
//! The business logic is runtime-agnostic:
//!
//! - Storage is abstracted behind the [`market::MarketStorage`] trait
//! - Funds forwarding goes through the [`market::PaymentGateway`] port
//! - Caller identity and logical time are passed via [`market::RuntimeContext`]
//!
//! An in-memory backend ([`market::MemoryStorage`]) is included for tests
//! and embedders that do not need durable storage.

pub mod crypto;
pub mod market;
