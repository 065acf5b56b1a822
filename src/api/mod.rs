pub mod config;
pub mod error;
pub mod response;
pub mod validation;
pub mod extractors;
pub mod handlers;
pub mod router;
#[cfg(test)]
pub(crate) mod test_support;
