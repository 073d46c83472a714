//! Search and stream resolution against an Invidious-compatible API.

mod client;
mod models;

pub use client::{SearchError, StreamError, YoutubeClient};
