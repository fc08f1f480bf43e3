//! Reports the latest stable Packagist release of every dependency declared
//! in a composer.json, optionally posting the report to Slack.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod version;
