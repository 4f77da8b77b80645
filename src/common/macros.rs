/// Logs a content lookup failure that is being absorbed, together with the
/// call site and the lookup parameters as JSON.
#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("probe active entity", &err, &params);
    ($what:expr, $err:expr, $params:expr) => {{
        let location = format!("{}:{}", file!(), line!());

        let params_json = ::serde_json::to_value($params)
            .unwrap_or(::serde_json::Value::Null);

        ::log::warn!(
            "{} failed at {}: {} (params: {})",
            $what,
            location,
            $err,
            params_json
        );
    }};
}
