mod client;

pub use client::{Client, Config, ServerRx, connect, connect_with_config};
pub use interview_types as types;
