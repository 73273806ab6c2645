use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// Maps a failed insert. A unique or primary-key violation becomes a conflict
/// so that concurrent writes surface as 409 instead of 500.
pub fn map_insert_error(err: DbErr, context: &str, conflict: &str) -> CoreError {
    error!("{}: {}", context, err);
    classify_insert_error(err.sql_err(), conflict)
}

fn classify_insert_error(sql_err: Option<SqlErr>, conflict: &str) -> CoreError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Conflict(conflict.to_string()),
        _ => CoreError::InternalServerError,
    }
}
