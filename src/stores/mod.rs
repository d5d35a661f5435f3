pub mod token_store;

pub use token_store::{CookieTokenStore, MemoryTokenStore, TokenStore};
