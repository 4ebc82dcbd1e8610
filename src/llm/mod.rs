mod client;
pub mod prompt;
pub mod providers;

pub use client::{create_client, Generator};

#[cfg(test)]
pub use client::MockGenerator;
