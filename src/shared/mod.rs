pub mod types;
pub mod validation;

#[cfg(test)]
pub mod fake_store;
#[cfg(test)]
pub mod test_helpers;
