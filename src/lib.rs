// langbridge - HTTP gateway to pretrained OPUS-MT translation models

pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod translation;
pub mod utils;
