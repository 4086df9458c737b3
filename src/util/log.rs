// ログ出力
// 環境変数 JANBOT_LOG (error|warn|info|debug) で出力レベルを指定する. 未指定の場合はinfo.
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn from_env() -> Self {
        match std::env::var("JANBOT_LOG").as_deref() {
            Ok("error") => Level::Error,
            Ok("warn") => Level::Warn,
            Ok("debug") => Level::Debug,
            _ => Level::Info,
        }
    }
}

pub fn enabled(level: Level) -> bool {
    static MAX_LEVEL: OnceLock<Level> = OnceLock::new();
    level <= *MAX_LEVEL.get_or_init(Level::from_env)
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Error) {
            eprintln!(
                "[ERROR]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Warn) {
            eprintln!(
                "[WARN]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Info) {
            eprintln!(
                "[INFO]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::Level::Debug) {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[test]
fn test_level_order() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Info < Level::Debug);
    assert!(enabled(Level::Error));
}
