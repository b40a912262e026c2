//! Notice tray: the user-facing outcome of every action.
//!
//! Views push a [`Notice`] through [`notify`] at the point where an action
//! finishes; [`NoticeTray`] renders the most recent ones until dismissed.

use api::FailureKind;
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Older notices are dropped past this many.
const MAX_NOTICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Level used when an action fails with `kind`.
    pub fn for_failure(kind: FailureKind) -> Self {
        match kind {
            FailureKind::Validation | FailureKind::Authorization => NoticeLevel::Warning,
            FailureKind::Authentication | FailureKind::Network => NoticeLevel::Error,
        }
    }

    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice info",
            NoticeLevel::Success => "notice success",
            NoticeLevel::Warning => "notice warning",
            NoticeLevel::Error => "notice error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn push(&mut self, level: NoticeLevel, message: &str, timestamp: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            timestamp,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_NOTICES {
            let overflow = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::error!("{}", message),
        NoticeLevel::Warning => tracing::warn!("{}", message),
        _ => tracing::info!("{}", message),
    }
    let ts = current_time();
    notices.write().push(level, message, ts);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60
    )
}

#[component]
pub fn NoticeTray() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-tray",
            role: "status",
            for entry in entries.into_iter().rev() {
                div {
                    key: "{entry.id}",
                    class: entry.level.class(),
                    span { class: "notice-time", "{entry.timestamp}" }
                    span { class: "notice-message", "{entry.message}" }
                    button {
                        class: "notice-dismiss",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_latest() {
        let mut notices = Notices::default();
        for i in 0..7 {
            notices.push(NoticeLevel::Info, &format!("n{i}"), String::new());
        }
        let messages: Vec<_> = notices.entries().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["n2", "n3", "n4", "n5", "n6"]);
    }

    #[test]
    fn test_dismiss() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeLevel::Success, "saved", String::new());
        let second = notices.push(NoticeLevel::Error, "failed", String::new());
        notices.dismiss(first);
        assert_eq!(notices.entries().len(), 1);
        assert_eq!(notices.entries()[0].id, second);
    }

    #[test]
    fn test_failure_levels() {
        assert_eq!(
            NoticeLevel::for_failure(FailureKind::Validation),
            NoticeLevel::Warning
        );
        assert_eq!(
            NoticeLevel::for_failure(FailureKind::Network),
            NoticeLevel::Error
        );
    }
}
