//! Display implementation for hrdash application messages.
//!
//! All user-facing text lives here, so wording stays consistent across
//! commands and can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into the text shown to the user.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hrdash::libs::messages::Message;
    ///
    /// let message = Message::HoursUpdated(42);
    /// assert_eq!(message.to_string(), "Working hours of record #42 updated");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleApi => "HR API settings".to_string(),
            Message::ConfigModulePush => "Live notification settings (used by applications embedding hrdash)".to_string(),
            Message::ApiNotConfigured => "HR API is not configured. Run `hrdash init` first.".to_string(),
            Message::PushNotConfigured => "Live notifications are not configured. Run `hrdash init` first.".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptApiUrl => "Enter the HR API URL".to_string(),
            Message::PromptApiLogin => "Enter your login (email)".to_string(),
            Message::PromptPushUserId => "Enter your user id for leave status notifications".to_string(),
            Message::PromptAnnouncementChannel => "Announcement channel".to_string(),
            Message::PromptAnnouncementEvent => "Announcement event name".to_string(),
            Message::PromptLeaveStatusChannel => "Leave status channel prefix".to_string(),
            Message::PromptLeaveStatusEvent => "Leave status event name".to_string(),

            // === SESSION MESSAGES ===
            Message::PromptPassword => "Enter your password".to_string(),
            Message::LoginSuccessful(login) => format!("Logged in as {}", login),
            Message::LoginFailed(error) => format!("Login failed: {}", error),
            Message::LoggedOut => "Logged out".to_string(),
            Message::AlreadyLoggedOut => "You are not logged in".to_string(),
            Message::SessionExpired => "Your session has expired. Run `hrdash login` again.".to_string(),
            Message::TokenNotDeleted(error) => format!("Could not remove the rejected session token: {}", error),

            // === DAILY RECORD MESSAGES ===
            Message::RecordsHeader(period) => format!("Daily work records for {}", period),
            Message::NoRecordsFound(period) => format!("No work records found for {}", period),
            Message::HoursUpdated(id) => format!("Working hours of record #{} updated", id),
            Message::AssignmentCreated(id) => format!("Assignment created as record #{}", id),
            Message::InvalidTimeInput(input) => format!("Invalid time '{}', expected HH:MM", input),
            Message::InvalidInterval { start, end } => format!("End time {} is before start time {}", end, start),
            Message::InvalidDateRange { from, to } => format!("Invalid date range: {} is after {}", from, to),

            // === SUMMARY MESSAGES ===
            Message::MonthlySummaryHeader(period) => format!("Working hours for {}", period),
            Message::NoSummaryData(period) => format!("No work records for {}", period),
            Message::InvalidMonth(month) => format!("Invalid month {}, expected 1-12", month),

            // === NOTIFICATION MESSAGES ===
            Message::AnnouncementsHeader => "Announcements".to_string(),
            Message::NoAnnouncements => "No announcements yet".to_string(),
            Message::LeaveRequestsHeader => "Leave requests".to_string(),
            Message::NoLeaveRequests => "No leave requests found".to_string(),

            // === API MESSAGES ===
            Message::RequestFailed(error) => format!("Request to the HR API failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
