//! Common types for the Viva Wallet client workspace

mod secret;

pub use secret::Secret;
