//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use museo_core::log_op_start;
/// log_op_start!("create_tour");
/// log_op_start!("create_tour", tour_id = "t123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use museo_core::log_op_end;
/// log_op_end!("create_tour", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use museo_core::{log_op_error, errors::MuseoError};
/// let err = MuseoError::TourNotFound { tour_id: "t1".to_string() };
/// log_op_error!("delete_tour", &err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = museo_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?$err.kind(),
            err_code = $err.code(),
            $($field)*
        );
    };
}
