pub mod auth;
pub mod client;
pub mod urls;

pub use auth::*;
pub use client::*;
pub use urls::*;
