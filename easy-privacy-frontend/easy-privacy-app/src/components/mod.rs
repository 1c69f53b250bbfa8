pub mod chatbot;
pub mod entry_table;
pub mod footer;
pub mod form_error;
pub mod header;
pub mod industry_select;
pub mod meta;
