pub mod aggregator;
pub mod entities;
pub mod localization;
pub mod ordering;
pub mod use_cases;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_fixtures;
