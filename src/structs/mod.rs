pub mod built_request;
pub mod cli;
pub mod config;
pub mod extra_parameter;
