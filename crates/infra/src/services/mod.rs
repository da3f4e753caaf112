mod notifier;

pub use notifier::{BrevoEmailNotifier, DisabledNotifier, INotifier};
