//! Shared utilities for the medical ledger contract suite.
//!
//! This crate provides:
//! - [`hashing`]: content-hash derivation and the zero-hash sentinel.
//! - [`index`]: append-only, paged hash lists for secondary lookups.
//! - [`validation`]: bounds and character checks for caller-supplied input.
//! - [`ttl`]: the storage lifetime policy every contract applies on write.
//! - [`CommonError`] and [`ErrorCategory`], used by the helpers above and by
//!   each contract's own error enum.
//!
//! Contract-specific errors convert from [`CommonError`] so the helpers
//! compose with `?`.

#![no_std]

use soroban_sdk::{contracterror, contracttype};

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod hashing;
pub mod index;
pub mod ttl;
pub mod validation;

pub use hashing::*;
pub use validation::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Errors raised by the shared helpers.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 30 – 39 | Validation / input            |
/// | 40 – 49 | Contract state                |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Validation (30–39) ───────────────────────────────────
    /// One or more input parameters are invalid (empty identifier,
    /// oversized text, negative amount).
    InvalidInput = 30,

    // ── Contract state (40–49) ───────────────────────────────
    /// A store's write counter or an index length cannot be advanced any
    /// further.
    SequenceExhausted = 40,
}

/// Coarse classification of contract errors, shared across the suite so
/// off-chain tooling can group failures without knowing every contract.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters or lifecycle misuse.
    Validation = 1,
    /// Permission and ownership failures.
    Authorization = 2,
    /// Resource lookup failures.
    NotFound = 3,
    /// The requested transition conflicts with stored state.
    StateConflict = 4,
}

impl CommonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CommonError::InvalidInput => ErrorCategory::Validation,
            CommonError::SequenceExhausted => ErrorCategory::StateConflict,
        }
    }
}
