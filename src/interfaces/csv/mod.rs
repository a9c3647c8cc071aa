pub mod menu_reader;
pub mod receipt_writer;
pub mod session_reader;
