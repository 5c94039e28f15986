#[derive(Debug, Clone)]
pub enum Message {
    // === CASE MESSAGES ===
    CaseCreated(String), // title
    CaseUpdated(String), // title
    CaseDeleted(i64),    // id
    CaseNotFound(i64),   // id
    NoCasesFound,
    CaseListHeader,
    EditingCase(String), // title
    SelectCaseAction,
    ConfirmDeleteCase(String), // title
    PromptCaseTitle,
    PromptClientName,
    PromptCaseDescription,
    PromptCaseStatus,
    PromptSelectCase,
    PromptAssignAttorney,

    // === TIME LOG MESSAGES ===
    TimeLogCreated(String), // formatted duration
    TimeLogDeleted(i64),    // id
    TimeLogNotFound(i64),   // id
    NoTimeLogsFound,
    TimeLogListHeader,
    SelectTimeLogAction,
    TimeLogEndBeforeStart,
    ConfirmDeleteTimeLog(i64), // id
    PromptLogDate,
    PromptTimeLogId,
    PromptStartTime,
    PromptEndTime,
    PromptActivityType,
    PromptLogDescription,
    PromptLogNotes,

    // === ATTORNEY MESSAGES ===
    AttorneyCreated(String),     // name
    AttorneyUpdated(String),     // name
    AttorneyDeleted(i64),        // id
    AttorneyNotFound(String),    // name
    AttorneyNotFoundWithId(i64), // id
    AttorneyEmailExists(String), // email
    NoAttorneysFound,
    AttorneyListHeader,
    EditingAttorney(String), // name
    SelectAttorneyAction,
    ConfirmDeleteAttorney(String), // name
    PromptAttorneyName,
    PromptAttorneyEmail,
    PromptAttorneyTitle,
    PromptAttorneyActive,
    PromptSelectAttorney,

    // === VALIDATION MESSAGES ===
    InvalidDateFormat(String),  // raw input
    InvalidMonthFormat(String), // raw input
    InvalidTimeFormat(String),  // raw input

    // === REPORT MESSAGES ===
    ReportHeader(String),     // period label
    ReportAttorney(String),   // attorney name
    CaseDetailHeader(String), // case title

    // === EXPORT MESSAGES ===
    ExportingReport,
    ExportCompleted(String), // output path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDefaults,
    ConfigModuleExport,
    PromptSelectModules,
    PromptDefaultAttorney,
    PromptExportDirectory,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // pending count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // target version
}
