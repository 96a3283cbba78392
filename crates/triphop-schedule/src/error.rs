use thiserror::Error;

use triphop_core::CoreError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
