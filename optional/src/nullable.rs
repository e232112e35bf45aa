// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::ptr::NonNull;

/// A type whose values may be a null-equivalent.
///
/// Plain Rust values are never absent, so only types with a real "nothing"
/// state implement this: [`Option`] (`None`) and raw pointers (null). The
/// strict constructors of [`Optional`](crate::Optional) reject the null state
/// instead of turning it into an empty container.
pub trait Nullable {
    /// The value carried when not null
    type Value;

    /// Returns the carried value, or `None` for the null state
    fn into_value(self) -> Option<Self::Value>;

    /// Returns true for the null state
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_value(self) -> Option<T> {
        self
    }

    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }

    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn into_value(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }

    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(3), Some(3); "some")]
    #[test_case(None, None; "none")]
    fn option_is_nullable(input: Option<u8>, expected: Option<u8>) {
        assert_eq!(input.is_null(), expected.is_none());
        assert_eq!(input.into_value(), expected);
    }

    #[test]
    fn nested_none_is_a_value() {
        let nested: Option<Option<u8>> = Some(None);
        assert!(!Nullable::is_null(&nested));
        assert_eq!(nested.into_value(), Some(None));
    }

    #[test]
    fn null_pointers_are_null() {
        let null: *const u32 = std::ptr::null();
        assert!(Nullable::is_null(&null));
        assert_eq!(null.into_value(), None);

        let null_mut: *mut u32 = std::ptr::null_mut();
        assert!(Nullable::is_null(&null_mut));
        assert_eq!(null_mut.into_value(), None);
    }

    #[test]
    fn live_pointers_are_present() {
        let mut value = 7u32;
        let ptr: *mut u32 = &raw mut value;
        assert!(!Nullable::is_null(&ptr));
        assert_eq!(ptr.into_value(), NonNull::new(ptr));

        let const_ptr: *const u32 = &raw const value;
        assert_eq!(
            const_ptr.into_value().map(NonNull::as_ptr),
            Some(const_ptr.cast_mut())
        );
    }
}
