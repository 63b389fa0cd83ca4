mod common;
mod tester_tests;
mod watcher_tests;
