//! Page modules

pub mod mint;
pub mod not_found;

pub use mint::MintPage;
pub use not_found::NotFound;
