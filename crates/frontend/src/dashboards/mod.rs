pub mod d400_sales_overview;
pub mod d401_comparative_months;
