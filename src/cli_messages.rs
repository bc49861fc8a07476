//! CLI command messaging
//!
//! Consistent, colored output for the one-shot commands (`stats`, `export`,
//! `configure`, ...). Warnings and errors go to stderr so command output can be piped.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;36m[INFO]\x1b[0m",
            MessageKind::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
            MessageKind::Warn => "\x1b[1;33m[WARN]\x1b[0m",
            MessageKind::Error => "\x1b[1;31m[ERROR]\x1b[0m",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, MessageKind::Warn | MessageKind::Error)
    }
}

/// `[TAG] title` followed by tab-separated details, when there are any.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.tag(), title)
    } else {
        format!("{} {}\t {}", kind.tag(), title, details)
    }
}

pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    let line = format_message(kind, title, details);
    if kind.to_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_message(MessageKind::Info, title, details);
}

pub fn print_warn(title: &str, details: &str) {
    print_message(MessageKind::Warn, title, details);
}

pub fn print_error(title: &str, details: Option<&str>) {
    print_message(MessageKind::Error, title, "");
    if let Some(details) = details {
        print_message(MessageKind::Error, "Details:", details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_message(MessageKind::Success, title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {{
        let details: &str = $details;
        $crate::cli_messages::print_error($title, Some(details))
    }};
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
