use log::LevelFilter;
use std::io::Write;

/// Installs the stderr logger. Later calls only adjust the max level.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .format(move |buf, record| {
            writeln!(
                buf,
                "{}: {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .filter_level(level);

    let _ = builder.try_init();

    log::set_max_level(level);
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let lvl = match level.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => return None,
    };
    Some(lvl)
}

/// Returns false for an unrecognised level name, leaving logging untouched.
pub fn set_log_level(level: &str) -> bool {
    match parse_level(level) {
        Some(lvl) => {
            init_logger(lvl);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("warn", Some(LevelFilter::Warn))]
    #[case("WARNING", Some(LevelFilter::Warn))]
    #[case(" debug ", Some(LevelFilter::Debug))]
    #[case("off", Some(LevelFilter::Off))]
    #[case("loud", None)]
    fn parses_level_names(#[case] input: &str, #[case] expected: Option<LevelFilter>) {
        assert_eq!(parse_level(input), expected);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(!set_log_level("verbose"));
    }
}
