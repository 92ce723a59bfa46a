pub mod columns;
pub mod indicators;
pub mod meta;
pub mod pivot;
