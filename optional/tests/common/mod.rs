// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

/// Routes `log` records to the test output when the logger feature is on.
pub fn init_logger() {
    #[cfg(feature = "logger")]
    let _ = env_logger::builder().is_test(true).try_init();
}
