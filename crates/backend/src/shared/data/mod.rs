pub mod cache;
pub mod dataset;

#[cfg(test)]
pub mod fixtures;
