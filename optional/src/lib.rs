// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![deny(unsafe_code)]

//! # optional provides [`Optional`], a value that may be missing
//!
//! An [`Optional`] is either present, holding exactly one value, or empty.
//! Absence is its own state rather than a sentinel of the element type, and
//! the combinators ([`Optional::map`], [`Optional::flat_map`],
//! [`Optional::filter`], the `or_else` family) let callers transform and
//! default a value without scattering presence checks.
//!
//! The capabilities those combinators accept are described by the
//! single-operation contracts in [`function`]. Inputs that may be a
//! null-equivalent implement [`Nullable`] and go through the strict
//! constructors, which reject null instead of producing an empty container.

mod error;
mod nullable;
mod optional;

pub mod function;

/// Logger module for handling logging functionality
pub mod logger;

// re-export these so callers don't need to know where they are
pub use error::{Operation, OptionalError};
pub use function::{BiConsumer, BiFunction, Consumer, Function, Predicate, Supplier};
pub use nullable::Nullable;
pub use optional::Optional;
