pub mod u501_upload_sales;
pub mod u502_sales_report;
