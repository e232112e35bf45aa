// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

use std::fmt::{self, Display, Formatter};

/// The container operation that was handed an absent value where it needed a
/// present one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Optional::try_of`](crate::Optional::try_of)
    Of,
    /// [`Optional::try_map`](crate::Optional::try_map)
    Map,
    /// [`Optional::try_flat_map`](crate::Optional::try_flat_map)
    FlatMap,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Of => "of",
            Operation::Map => "map",
            Operation::FlatMap => "flat_map",
        })
    }
}

/// Errors returned by [`Optional`](crate::Optional) operations.
///
/// Both variants signal caller misuse. The container never recovers from
/// them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum OptionalError {
    /// A present value was required but the input was a null-equivalent
    #[error("{operation} requires a present value but received an absent one")]
    InvalidConstruction {
        /// The operation that rejected the input
        operation: Operation,
    },

    /// The value was read from an empty container
    #[error("no value present")]
    NoSuchElement,
}

impl OptionalError {
    /// Builds an [`OptionalError::InvalidConstruction`] for `operation`,
    /// recording the rejection at trace level.
    pub(crate) fn invalid_construction(operation: Operation) -> Self {
        crate::logger::trace!("{operation} rejected an absent value");
        OptionalError::InvalidConstruction { operation }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(Operation::Of, "of requires a present value but received an absent one")]
    #[test_case(Operation::Map, "map requires a present value but received an absent one")]
    #[test_case(
        Operation::FlatMap,
        "flat_map requires a present value but received an absent one"
    )]
    fn invalid_construction_message(operation: Operation, expected: &str) {
        assert_eq!(
            OptionalError::invalid_construction(operation).to_string(),
            expected
        );
    }

    #[test]
    fn no_such_element_message() {
        assert_eq!(OptionalError::NoSuchElement.to_string(), "no value present");
    }
}
