//! Cross-crate scenarios: the services wired over the real document store.

#[cfg(test)]
mod scenarios;
