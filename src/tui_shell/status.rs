use std::sync::OnceLock;

use time::OffsetDateTime;
use time::format_description::FormatItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(super) struct StatusLine {
    pub(super) kind: StatusKind,
    pub(super) ts: String,
    pub(super) text: String,
}

impl StatusLine {
    pub(super) fn info(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, text.into())
    }

    pub(super) fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text.into())
    }

    fn new(kind: StatusKind, text: String) -> Self {
        Self {
            kind,
            ts: clock_now(),
            text,
        }
    }
}

fn clock_format() -> Option<&'static [FormatItem<'static>]> {
    static FMT: OnceLock<Option<Vec<FormatItem<'static>>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse("[hour]:[minute]:[second]").ok()
    })
    .as_deref()
}

fn clock_now() -> String {
    let now = OffsetDateTime::now_utc();
    clock_format()
        .and_then(|fmt| now.format(fmt).ok())
        .unwrap_or_else(|| "--:--:--".to_string())
}
