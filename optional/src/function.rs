// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

//! Single-operation capabilities accepted by [`Optional`](crate::Optional).
//!
//! Each contract names the shape of one `FnOnce` closure: any closure or
//! function item with that shape implements it. A capability is consumed when
//! invoked, so it runs at most once per call.

/// Takes a value and returns nothing.
pub trait Consumer<T>: FnOnce(T) {
    /// Performs the operation on `value`
    #[inline]
    fn accept(self, value: T)
    where
        Self: Sized,
    {
        self(value)
    }
}

impl<T, F: FnOnce(T)> Consumer<T> for F {}

/// Takes a value and produces a result.
pub trait Function<T, R>: FnOnce(T) -> R {
    /// Applies the function to `value`
    #[inline]
    fn apply(self, value: T) -> R
    where
        Self: Sized,
    {
        self(value)
    }
}

impl<T, R, F: FnOnce(T) -> R> Function<T, R> for F {}

/// Takes two values and produces a result.
pub trait BiFunction<T, U, R>: FnOnce(T, U) -> R {
    /// Applies the function to `t` and `u`
    #[inline]
    fn apply(self, t: T, u: U) -> R
    where
        Self: Sized,
    {
        self(t, u)
    }
}

impl<T, U, R, F: FnOnce(T, U) -> R> BiFunction<T, U, R> for F {}

/// Takes two values and returns nothing.
pub trait BiConsumer<T, U>: FnOnce(T, U) {
    /// Performs the operation on `t` and `u`
    #[inline]
    fn accept(self, t: T, u: U)
    where
        Self: Sized,
    {
        self(t, u)
    }
}

impl<T, U, F: FnOnce(T, U)> BiConsumer<T, U> for F {}

/// Tests a borrowed value.
pub trait Predicate<T>: FnOnce(&T) -> bool {
    /// Returns true if `value` matches
    #[inline]
    fn test(self, value: &T) -> bool
    where
        Self: Sized,
    {
        self(value)
    }
}

impl<T, F: FnOnce(&T) -> bool> Predicate<T> for F {}

/// Produces a value from nothing.
pub trait Supplier<T>: FnOnce() -> T {
    /// Produces the value
    #[inline]
    fn get(self) -> T
    where
        Self: Sized,
    {
        self()
    }
}

impl<T, F: FnOnce() -> T> Supplier<T> for F {}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;

    fn join_pair<F: BiFunction<String, String, String>>(f: F) -> String {
        f.apply(String::from("left"), String::from("right"))
    }

    fn for_pair<C: BiConsumer<u8, u8>>(consumer: C) {
        consumer.accept(1, 2);
    }

    #[test]
    fn closures_implement_every_contract() {
        let seen = RefCell::new(Vec::new());

        Consumer::accept(|v: u32| seen.borrow_mut().push(v), 1);
        BiConsumer::accept(|a: u32, b: u32| seen.borrow_mut().push(a + b), 2, 3);
        assert_eq!(*seen.borrow(), vec![1, 5]);

        assert_eq!(Function::apply(|v: u32| v + 1, 1), 2);
        assert_eq!(
            BiFunction::apply(|a: &str, b: usize| a.repeat(b), "ab", 2),
            "abab"
        );
        assert!(Predicate::test(|v: &u32| *v > 1, &2));
        assert!(!Predicate::test(|v: &u32| *v > 1, &1));
        assert_eq!(Supplier::get(|| "fallback"), "fallback");
    }

    #[test]
    fn closure_arguments_are_inferred_from_the_contract() {
        assert_eq!(join_pair(|l, r| l + "|" + &r), "left|right");

        let sum = RefCell::new(0);
        for_pair(|a, b| *sum.borrow_mut() += a + b);
        assert_eq!(*sum.borrow(), 3);
    }

    #[test]
    fn function_items_implement_contracts() {
        assert_eq!(Function::apply(str::len, "four"), 4);
        assert_eq!(Supplier::<String>::get(String::new), "");
    }
}
