use thiserror::Error;

/// Reason a schedule cannot produce a next occurrence.
///
/// The `Display` text of each variant is stable and meant to be shown or
/// compared as-is by callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleError {
    #[error("Schedule was cancelled!")]
    Cancelled,

    #[error("Start date can't be later than end date")]
    InvalidBounds,

    #[error("Current date is past end date!")]
    PastEndDate,

    #[error("Starting time can't be later than or equal to ending time")]
    InvalidTimeWindow,

    #[error("Number of months can't be non positive!")]
    InvalidMonthInterval,

    #[error("Invalid month date!")]
    InvalidMonthDay,

    #[error("Current Date is past execution date")]
    PastExecutionDate,

    #[error("Number of weeks can't be non positive!")]
    InvalidWeekInterval,

    #[error("At least one day of the week must be selected!")]
    NoWeekdaysSelected,

    #[error("Interval can't be non positive!")]
    InvalidInterval,

    #[error("Computed date is out of the supported range!")]
    OutOfRange,
}

/// Outcome of a single next-occurrence computation.
pub type OccurrenceResult = Result<chrono::NaiveDateTime, ScheduleError>;
