pub mod connector;
pub mod notifier;
