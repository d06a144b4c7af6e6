use crate::game::{Deferred, TimerCommand};
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Schedule { delay: Duration, deferred: Deferred },
    CancelTimers,
    Quit,
}

impl From<TimerCommand> for Action {
    fn from(cmd: TimerCommand) -> Self {
        match cmd {
            TimerCommand::Schedule { delay, deferred } => Action::Schedule { delay, deferred },
            TimerCommand::CancelAll => Action::CancelTimers,
        }
    }
}
