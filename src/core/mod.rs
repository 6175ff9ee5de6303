//! Configuration and data model shared by every stage of the pipeline

pub mod config;
pub mod models;
