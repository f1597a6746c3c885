mod client;

pub use client::HttpConfigStore;
