pub mod constants;
pub mod memory_store;
pub mod toml_file_store;
