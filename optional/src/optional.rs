// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::fmt::{self, Debug, Display, Formatter};

use crate::error::{Operation, OptionalError};
use crate::function::{Consumer, Function, Predicate, Supplier};
use crate::nullable::Nullable;

/// A container that either holds exactly one value or is empty.
///
/// Every combinator consumes the container and returns a new one, so a
/// container never changes after it is built. Use [`Optional::as_ref`] to run
/// a chain against a borrowed value instead.
///
/// Equality is type-checked: containers compare only against containers of
/// the same element type, and two of them are equal when both are empty or
/// both hold equal values. Every empty container hashes the same, and a
/// present one hashes its value.
///
/// ```
/// use optional::Optional;
///
/// let greeting = Optional::of("a").map(|s| format!("{s}b"));
/// assert_eq!(greeting.or_else(String::new()), "ab");
///
/// let big = Optional::of(5).filter(|n| *n > 10).or_else(-1);
/// assert_eq!(big, -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T>(State<T>);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum State<T> {
    Present(T),
    Absent,
}

impl<T> Optional<T> {
    /// The empty container. It carries no state, so every element type shares
    /// the same zero-sized representation of absence.
    pub const EMPTY: Self = Optional(State::Absent);

    /// Wraps `value`. A Rust value is never absent, so this cannot fail; use
    /// [`Optional::try_of`] when the input may be a null-equivalent. A null
    /// pointer or `None` passed here is wrapped as a present value.
    #[inline]
    pub const fn of(value: T) -> Self {
        Optional(State::Present(value))
    }

    /// Returns the empty container.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Wraps the value carried by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidConstruction`] if `value` is null. An
    /// absent input is never turned into an empty container here.
    pub fn try_of<N>(value: N) -> Result<Self, OptionalError>
    where
        N: Nullable<Value = T>,
    {
        value
            .into_value()
            .map(Self::of)
            .ok_or_else(|| OptionalError::invalid_construction(Operation::Of))
    }

    /// Wraps the value carried by `value`, or returns the empty container if
    /// `value` is null.
    #[inline]
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        match value.into_value() {
            Some(value) => Self::of(value),
            None => Self::EMPTY,
        }
    }

    /// Returns true if a value is present.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self.0, State::Present(_))
    }

    /// Returns true if no value is present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Hands the value to `consumer` if one is present; does nothing otherwise.
    pub fn if_present<C: Consumer<T>>(self, consumer: C) {
        if let State::Present(value) = self.0 {
            consumer.accept(value);
        }
    }

    /// Applies `mapper` to a present value and wraps the result. An empty
    /// container stays empty and `mapper` is not called.
    ///
    /// The result is wrapped as-is, even a null pointer; use
    /// [`Optional::try_map`] when `mapper` may produce a null-equivalent.
    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: Function<T, U>,
    {
        match self.0 {
            State::Present(value) => Optional::of(mapper.apply(value)),
            State::Absent => Optional::EMPTY,
        }
    }

    /// Like [`Optional::map`] for a `mapper` whose result may be a
    /// null-equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidConstruction`] if `mapper` produces a
    /// null. A present value is never silently mapped to an empty container.
    pub fn try_map<N, F>(self, mapper: F) -> Result<Optional<N::Value>, OptionalError>
    where
        N: Nullable,
        F: Function<T, N>,
    {
        match self.0 {
            State::Present(value) => mapper
                .apply(value)
                .into_value()
                .map(Optional::of)
                .ok_or_else(|| OptionalError::invalid_construction(Operation::Map)),
            State::Absent => Ok(Optional::EMPTY),
        }
    }

    /// Applies a container-returning `mapper` to a present value and returns
    /// its container as-is, without nesting. An empty container stays empty.
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: Function<T, Optional<U>>,
    {
        match self.0 {
            State::Present(value) => mapper.apply(value),
            State::Absent => Optional::EMPTY,
        }
    }

    /// Like [`Optional::flat_map`] for a `mapper` that may produce no container
    /// at all.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::InvalidConstruction`] if `mapper` produces a
    /// null instead of a container. An empty container returned by `mapper`
    /// is a valid result.
    pub fn try_flat_map<U, N, F>(self, mapper: F) -> Result<Optional<U>, OptionalError>
    where
        N: Nullable<Value = Optional<U>>,
        F: Function<T, N>,
    {
        match self.0 {
            State::Present(value) => mapper
                .apply(value)
                .into_value()
                .ok_or_else(|| OptionalError::invalid_construction(Operation::FlatMap)),
            State::Absent => Ok(Optional::EMPTY),
        }
    }

    /// Keeps a present value only if `predicate` accepts it.
    pub fn filter<P: Predicate<T>>(self, predicate: P) -> Self {
        let keep = match &self.0 {
            State::Present(value) => predicate.test(value),
            State::Absent => false,
        };
        if keep { self } else { Self::EMPTY }
    }

    /// Returns the value, or `other` if empty. `other` is evaluated by the
    /// caller either way; use [`Optional::or_else_get`] for an expensive
    /// fallback.
    #[inline]
    pub fn or_else(self, other: T) -> T {
        match self.0 {
            State::Present(value) => value,
            State::Absent => other,
        }
    }

    /// Returns the value, or the result of `supplier` if empty. `supplier` is
    /// only called when the container is empty.
    pub fn or_else_get<S: Supplier<T>>(self, supplier: S) -> T {
        match self.0 {
            State::Present(value) => value,
            State::Absent => supplier.get(),
        }
    }

    /// Returns the value, or the error produced by `error_supplier` if empty.
    ///
    /// # Errors
    ///
    /// Returns whatever `error_supplier` produces when the container is
    /// empty. The error type is entirely the caller's.
    pub fn or_else_throw<E, S: Supplier<E>>(self, error_supplier: S) -> Result<T, E> {
        match self.0 {
            State::Present(value) => Ok(value),
            State::Absent => Err(error_supplier.get()),
        }
    }

    /// Returns the value.
    ///
    /// Prefer [`Optional::or_else`], [`Optional::or_else_get`] or
    /// [`Optional::or_else_throw`], which make the empty case explicit.
    ///
    /// # Errors
    ///
    /// Returns [`OptionalError::NoSuchElement`] if the container is empty.
    pub fn get(self) -> Result<T, OptionalError> {
        self.or_else_throw(|| OptionalError::NoSuchElement)
    }

    /// Returns the value, panicking if the container is empty.
    ///
    /// This skips the presence check entirely and is discouraged; use
    /// [`Optional::get`] or the `or_else` family instead.
    ///
    /// # Panics
    ///
    /// Panics with [`OptionalError::NoSuchElement`]'s message if the container
    /// is empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.0 {
            State::Present(value) => value,
            State::Absent => panic!("{}", OptionalError::NoSuchElement),
        }
    }

    /// Borrows the value, producing a container of a reference.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self.0 {
            State::Present(ref value) => Optional::of(value),
            State::Absent => Optional::EMPTY,
        }
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.0 {
            State::Present(value) => Some(value),
            State::Absent => None,
        }
    }

    /// Iterates over the value, yielding it at most once.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_iter()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Present(value) => write!(f, "Optional[{value:?}]"),
            State::Absent => f.write_str("Optional.empty"),
        }
    }
}

impl<T: Display> Display for Optional<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            State::Present(value) => write!(f, "Optional[{value}]"),
            State::Absent => f.write_str("Optional.empty"),
        }
    }
}
