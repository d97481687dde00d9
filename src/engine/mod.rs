pub mod matcher;
pub mod notifier;
pub mod stats;
