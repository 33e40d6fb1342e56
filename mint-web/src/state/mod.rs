//! Page state

pub mod mint;
