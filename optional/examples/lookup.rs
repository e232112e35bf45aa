// Copyright (C) 2023, Ava Labs, Inc. All rights reserved.
// See the file LICENSE.md for licensing terms.

//! Looks up ages in a map and defaults the missing ones.

use std::collections::HashMap;
use std::error::Error;

use optional::{Optional, OptionalError};

#[derive(Debug, thiserror::Error)]
#[error("no user named {0}")]
struct UnknownUser(String);

/// cargo run --example lookup
fn main() -> Result<(), Box<dyn Error>> {
    let ages: HashMap<&str, u32> = [("ada", 36), ("grace", 85)].into_iter().collect();
    let age_of = |name: &str| Optional::of_nullable(ages.get(name).copied());

    let ada = age_of("ada").map(|age| age + 1).or_else(0);
    println!("ada next year: {ada}");

    let senior = age_of("grace").filter(|age| *age >= 65);
    println!("grace senior: {senior}");

    let nobody = age_of("nobody").or_else_get(|| 18);
    println!("nobody defaults to: {nobody}");

    match age_of("nobody").get() {
        Err(OptionalError::NoSuchElement) => println!("nobody has no age"),
        other => println!("unexpected: {other:?}"),
    }

    let grace = age_of("grace").or_else_throw(|| UnknownUser("grace".into()))?;
    println!("grace: {grace}");

    age_of("ada").if_present(|age| println!("ada is present with age {age}"));
    Ok(())
}
