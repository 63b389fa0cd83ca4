pub mod webhook_config;
