use crate::timeline::{Phase, Sequence};

pub const ENTER_DELAY_MS: u32 = 100;
pub const EXIT_DURATION_MS: u32 = 300;

pub const NOTIFICATION_BASE_STYLE: &str = "position: fixed; top: 2rem; right: 2rem; \
     padding: 1rem 1.5rem; color: white; border-radius: var(--border-radius); \
     box-shadow: var(--shadow-lg); z-index: 10000; transition: transform 0.3s ease; \
     font-weight: 500;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn modifier_class(self) -> String {
        format!("notification-{}", self.as_str())
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--primary-color)",
            Self::Error => "#ef4444",
            Self::Info => "var(--accent-color)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStage {
    Offscreen,
    Shown,
    Leaving,
    Removed,
}

impl NotificationStage {
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateX(0)",
            Self::Offscreen | Self::Leaving | Self::Removed => "translateX(100%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn style(&self, stage: NotificationStage) -> String {
        format!(
            "{NOTIFICATION_BASE_STYLE} background: {}; transform: {};",
            self.kind.background(),
            stage.transform()
        )
    }
}

/// Slide in, hold, slide out, remove. `display_ms` counts from insertion.
#[derive(Clone, Debug)]
pub struct NotificationLifecycle {
    stage: NotificationStage,
    display_ms: u32,
}

impl NotificationLifecycle {
    pub fn new(display_ms: u32) -> Self {
        Self {
            stage: NotificationStage::Offscreen,
            display_ms,
        }
    }
}

impl Sequence for NotificationLifecycle {
    type Step = NotificationStage;

    fn phase(&self) -> Phase {
        match self.stage {
            NotificationStage::Offscreen => Phase::Pending,
            NotificationStage::Shown | NotificationStage::Leaving => Phase::Running,
            NotificationStage::Removed => Phase::Done,
        }
    }

    fn next_delay_ms(&self) -> Option<u32> {
        match self.stage {
            NotificationStage::Offscreen => Some(ENTER_DELAY_MS),
            NotificationStage::Shown => Some(self.display_ms.saturating_sub(ENTER_DELAY_MS)),
            NotificationStage::Leaving => Some(EXIT_DURATION_MS),
            NotificationStage::Removed => None,
        }
    }

    fn advance(&mut self) -> Option<NotificationStage> {
        let next = match self.stage {
            NotificationStage::Offscreen => NotificationStage::Shown,
            NotificationStage::Shown => NotificationStage::Leaving,
            NotificationStage::Leaving => NotificationStage::Removed,
            NotificationStage::Removed => return None,
        };
        self.stage = next;
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Push(Notification),
    Advance { id: u32, stage: NotificationStage },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    entries: Vec<(Notification, NotificationStage)>,
}

impl NotificationQueue {
    pub fn entries(&self) -> &[(Notification, NotificationStage)] {
        &self.entries
    }

    pub fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Push(notification) => {
                self.entries.push((notification, NotificationStage::Offscreen));
            }
            NotificationAction::Advance {
                id,
                stage: NotificationStage::Removed,
            } => {
                self.entries.retain(|(notification, _)| notification.id != id);
            }
            NotificationAction::Advance { id, stage } => {
                if let Some(entry) = self
                    .entries
                    .iter_mut()
                    .find(|(notification, _)| notification.id == id)
                {
                    entry.1 = stage;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::testing::record;

    fn notification(id: u32, kind: NotificationKind) -> Notification {
        Notification {
            id,
            kind,
            message: format!("message {id}"),
        }
    }

    #[tokio::test]
    async fn lifecycle_slides_in_holds_and_leaves() {
        let stages = record(NotificationLifecycle::new(3_000)).await;

        assert_eq!(
            stages,
            vec![
                (100, NotificationStage::Shown),
                (3_000, NotificationStage::Leaving),
                (3_300, NotificationStage::Removed),
            ]
        );
    }

    #[test]
    fn queue_tracks_stages_and_drops_removed_entries() {
        let mut queue = NotificationQueue::default();
        queue.apply(NotificationAction::Push(notification(1, NotificationKind::Error)));
        queue.apply(NotificationAction::Push(notification(2, NotificationKind::Success)));

        queue.apply(NotificationAction::Advance {
            id: 1,
            stage: NotificationStage::Shown,
        });
        assert_eq!(queue.entries()[0].1, NotificationStage::Shown);
        assert_eq!(queue.entries()[1].1, NotificationStage::Offscreen);

        queue.apply(NotificationAction::Advance {
            id: 1,
            stage: NotificationStage::Removed,
        });
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].0.id, 2);
    }

    #[test]
    fn advancing_an_unknown_notification_is_a_no_op() {
        let mut queue = NotificationQueue::default();
        queue.apply(NotificationAction::Push(notification(1, NotificationKind::Info)));
        let before = queue.clone();

        queue.apply(NotificationAction::Advance {
            id: 9,
            stage: NotificationStage::Leaving,
        });
        assert_eq!(queue, before);
    }

    #[test]
    fn style_reflects_kind_and_stage() {
        let error = notification(1, NotificationKind::Error);

        let hidden = error.style(NotificationStage::Offscreen);
        assert!(hidden.contains("background: #ef4444;"));
        assert!(hidden.contains("transform: translateX(100%);"));

        let shown = error.style(NotificationStage::Shown);
        assert!(shown.contains("transform: translateX(0);"));
        assert_eq!(NotificationKind::Success.modifier_class(), "notification-success");
    }
}
