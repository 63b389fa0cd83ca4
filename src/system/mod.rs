pub mod session_monitor;
