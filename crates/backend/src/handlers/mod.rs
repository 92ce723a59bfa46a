// Lookup handlers
pub mod meta;

// Dashboard handlers (d400-d402)
pub mod d400_overview;
pub mod d401_sales;
pub mod d402_inventory;
