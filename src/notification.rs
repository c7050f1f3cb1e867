//! Transient user notifications

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Danger => "notification danger",
        }
    }
}

/// A message shown until its dismissal timer fires.
/// `id` lets a timer clear only the notification it was started for.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert_eq!(NotificationKind::Success.css_class(), "notification success");
        assert_eq!(NotificationKind::Danger.css_class(), "notification danger");
    }
}
