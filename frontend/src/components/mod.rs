pub mod handlers;
pub mod header;
pub mod results;
pub mod upload_form;
pub mod utils;
