//! Operation boundary macros
//!
//! An engine operation brackets its work with `log_op_start!` and then either
//! `log_op_end!` or `log_op_error!`. Field names follow
//! `arsenal_core_types::schema`; the expanding crate needs `tracing` and
//! `arsenal-core-types` as dependencies.

/// Emit the `start` event for `$op`, with optional extra fields
///
/// ```
/// # use arsenal_core::log_op_start;
/// let snippet_id = 12_i64;
/// log_op_start!("snippet_get", snippet_id = snippet_id);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Emit the `end` event for `$op`; `duration_ms` is required
///
/// ```
/// # use arsenal_core::log_op_end;
/// let rows: Vec<i64> = vec![3, 1];
/// log_op_end!("snippet_search", duration_ms = 2_u64, result_len = rows.len() as u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Emit the `end_error` event for `$op` at ERROR level
///
/// `$err` is consumed and converted into `ExError`, whose kind, stable code
/// and message become the `err_kind`, `err_code` and `err_message` fields.
///
/// ```
/// # use arsenal_core::log_op_error;
/// use arsenal_core::errors::SnippetError;
///
/// let err = SnippetError::MissingField { field: "code" };
/// log_op_error!("snippet_save", err, duration_ms = 0_u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = arsenal_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($field)*
        );
    }};
}
