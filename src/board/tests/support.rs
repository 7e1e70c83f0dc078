//! Shared helpers for board unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::board::domain::{Task, TaskId, TaskTitle};

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_epoch_offset(seconds: i64) -> Self {
        Self(
            Utc.timestamp_opt(1_700_000_000 + seconds, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a task with a sequence-derived identifier.
pub fn task(sequence: u64, title: &str) -> Task {
    Task::new(
        TaskId::from_sequence(sequence),
        TaskTitle::new(title).expect("valid title"),
        &FixedClock::at_epoch_offset(0),
    )
}

/// Returns the titles of `tasks` in order.
pub fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.title().as_str()).collect()
}
