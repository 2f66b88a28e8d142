//! External service integrations.

pub mod kudoly;

pub use kudoly::KudolyClient;
