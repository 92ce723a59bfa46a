pub mod d400_overview;
pub mod d401_sales;
pub mod d402_inventory;
