pub mod account_directory;
pub mod token_blacklist;
pub mod token_provider;

pub use account_directory::{AccountDirectory, AccountDirectoryError};
pub use token_blacklist::TokenBlacklist;
pub use token_provider::{SessionClaims, TokenError, TokenProvider};
