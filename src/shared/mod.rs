pub mod constants;
pub mod deserializers;
#[cfg(test)]
pub mod test_helpers;
pub mod types;
pub mod validation;
