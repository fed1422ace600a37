//! Task aggregate root and the mutable details it carries.

use super::{TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Number of fractional-second digits retained on timestamps.
///
/// `PostgreSQL` `timestamptz` stores microseconds, so anything finer would
/// not survive a round trip through the relational adapter.
const TIMESTAMP_PRECISION: u16 = 6;

/// Truncates a timestamp to the precision persisted by the store.
#[must_use]
pub fn normalize_timestamp(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(TIMESTAMP_PRECISION)
}

/// Replaceable task fields supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: TaskTitle,
    description: Option<String>,
    expiration_date: DateTime<Utc>,
}

impl TaskDetails {
    /// Creates task details with no description.
    #[must_use]
    pub fn new(title: TaskTitle, expiration_date: DateTime<Utc>) -> Self {
        Self {
            title,
            description: None,
            expiration_date: normalize_timestamp(expiration_date),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the requested expiration timestamp.
    #[must_use]
    pub const fn expiration_date(&self) -> DateTime<Utc> {
        self.expiration_date
    }
}

/// Task aggregate root.
///
/// `id` and `creation_date` are fixed at construction. The expiration date is
/// always strictly later than the creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    creation_date: DateTime<Utc>,
    expiration_date: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Persisted expiration timestamp.
    pub expiration_date: DateTime<Utc>,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ExpirationNotInFuture`] when the requested
    /// expiration is not strictly after the clock reading.
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let now = normalize_timestamp(clock.utc());
        let TaskDetails {
            title,
            description,
            expiration_date,
        } = details;

        if expiration_date <= now {
            return Err(TaskDomainError::ExpirationNotInFuture {
                expiration_date,
                now,
            });
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description,
            creation_date: now,
            expiration_date,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            creation_date: data.creation_date,
            expiration_date: data.expiration_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Returns the expiration timestamp.
    #[must_use]
    pub const fn expiration_date(&self) -> DateTime<Utc> {
        self.expiration_date
    }

    /// Replaces title, description and expiration date.
    ///
    /// The identifier and creation date are preserved. The task is left
    /// unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ExpirationBeforeCreation`] when the new
    /// expiration is not strictly after the creation date.
    pub fn revise(&mut self, details: TaskDetails) -> Result<(), TaskDomainError> {
        if details.expiration_date <= self.creation_date {
            return Err(TaskDomainError::ExpirationBeforeCreation {
                expiration_date: details.expiration_date,
                creation_date: self.creation_date,
            });
        }

        self.title = details.title;
        self.description = details.description;
        self.expiration_date = details.expiration_date;
        Ok(())
    }
}
