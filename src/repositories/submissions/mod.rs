mod commands;
mod queries;
mod types;

pub(crate) use commands::{mark_graded, mark_released};
pub(crate) use queries::{find_by_id, list};
pub(crate) use types::{GradedUpdate, StoreError};
