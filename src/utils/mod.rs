pub mod error;
pub mod logger;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_env;
