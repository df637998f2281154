pub mod client;
pub mod stdio;

pub use client::ChatClient;
