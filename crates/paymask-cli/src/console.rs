//! Terminal output for the interactive form.

use paymask_checkout::{Notification, Notifier};
use paymask_core::Field;
use paymask_form::FormSnapshot;

/// Notifier that prints notifications to standard output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        println!("{}", render_notification(&notification));
    }
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = if notification.success { "+" } else { "!" };
    format!("[{marker}] {}: {}", notification.title, notification.message)
}

/// Render the form as one line per field plus the submit state.
pub fn render_snapshot(snapshot: &FormSnapshot) -> String {
    let mut lines: Vec<String> = Field::ALL
        .into_iter()
        .map(|field| {
            let value = snapshot.fields.get(field);
            match snapshot.validation.error(field) {
                Some(message) => format!("  {:<15} {:<20} ({message})", field.as_str(), value),
                None => format!("  {:<15} {}", field.as_str(), value),
            }
        })
        .collect();

    let submit = if snapshot.is_valid { "enabled" } else { "disabled" };
    lines.push(format!("  submit: {submit}"));
    lines.join("\n")
}
