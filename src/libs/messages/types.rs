#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleApi,
    ConfigModulePush,
    ApiNotConfigured,
    PushNotConfigured,
    PromptSelectModules,
    PromptApiUrl,
    PromptApiLogin,
    PromptPushUserId,
    PromptAnnouncementChannel,
    PromptAnnouncementEvent,
    PromptLeaveStatusChannel,
    PromptLeaveStatusEvent,

    // === SESSION MESSAGES ===
    PromptPassword,
    LoginSuccessful(String), // login
    LoginFailed(String),     // error
    LoggedOut,
    AlreadyLoggedOut,
    SessionExpired,
    TokenNotDeleted(String), // error

    // === DAILY RECORD MESSAGES ===
    RecordsHeader(String),  // date or range
    NoRecordsFound(String), // date or range
    HoursUpdated(u64),      // record id
    AssignmentCreated(u64), // record id
    InvalidTimeInput(String),
    InvalidInterval { start: String, end: String },
    InvalidDateRange { from: String, to: String },

    // === SUMMARY MESSAGES ===
    MonthlySummaryHeader(String), // month/year
    NoSummaryData(String),        // month/year
    InvalidMonth(u32),

    // === NOTIFICATION MESSAGES ===
    AnnouncementsHeader,
    NoAnnouncements,
    LeaveRequestsHeader,
    NoLeaveRequests,

    // === API MESSAGES ===
    RequestFailed(String), // error
}
