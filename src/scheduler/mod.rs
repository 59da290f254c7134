//! Cron jobs for automated tasks, run independently of incoming requests.

pub mod keep_alive;
