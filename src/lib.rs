// src/lib.rs

//! Stampwatch: publish-alert crawl service library.

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod server;
pub mod services;
pub mod utils;
