#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// True when tracing was requested via `MINE_ESCAPE_DEBUG`.
#[macro_export]
macro_rules! debug_enabled {
    () => {
        std::env::var_os("MINE_ESCAPE_DEBUG").is_some()
    };
}
