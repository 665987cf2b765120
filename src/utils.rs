//! Utility functions for user interaction and common operations.

/// Format the deletion confirmation message with the selected repositories
pub fn format_confirmation_message(names: &[String]) -> String {
    let mut message =
        String::from("Please confirm you want to delete the following repositories:");
    for name in names {
        message.push_str(&format!("\n\t- {name}"));
    }
    message
}
