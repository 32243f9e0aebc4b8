//! Network layer: the HTTP client used to talk to the Data API

mod client;

pub use client::HttpClient;
