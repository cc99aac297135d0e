pub mod account_directory_memory;
pub mod jwt;
pub mod token_blacklist_memory;
