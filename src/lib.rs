pub mod cli;
pub mod config;
pub mod crawler;
pub mod directory;
pub mod export;
pub mod models;
pub mod phone;
