//! Toast-style notifications and the queue that shows them one at a time

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::constants::{DEFAULT_NOTIFICATION_MS, MAX_PENDING_NOTIFICATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An action was carried out
    Info,
    /// The action needs something first, e.g. a selected contact
    Hint,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            kind,
            message: message.into(),
            created_at: chrono::Utc::now(),
            displayed_at: None,
            duration: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    #[must_use]
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Hint, message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.displayed_at
            .is_some_and(|start| now.saturating_duration_since(start) > self.duration)
    }

    pub fn mark_displayed_at(&mut self, now: Instant) -> bool {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(now);
            true
        } else {
            false
        }
    }
}

/// FIFO of notifications; the front one is on screen
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_MS))
    }
}

impl NotificationQueue {
    pub fn new(duration: Duration) -> Self {
        NotificationQueue {
            pending: VecDeque::with_capacity(MAX_PENDING_NOTIFICATIONS),
            duration,
        }
    }

    /// Queue a notification. When full, the oldest entry that is not yet on
    /// screen makes room.
    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() >= MAX_PENDING_NOTIFICATIONS {
            let drop_at = if self.pending.len() > 1 { 1 } else { 0 };
            if let Some(dropped) = self.pending.remove(drop_at) {
                tracing::debug!(text = %dropped.message, "Notification dropped, queue full");
            }
        }
        self.pending
            .push_back(notification.with_duration(self.duration));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance the queue clock. Returns true when what is on screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self
            .pending
            .front()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.pending.pop_front();
            changed = true;
        }
        if let Some(front) = self.pending.front_mut() {
            front.mark_displayed_at(now);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::hint("Choose a contact");
        assert_eq!(n.kind, NotificationKind::Hint);
        assert_eq!(n.message, "Choose a contact");
        assert_eq!(n.duration, Duration::from_millis(DEFAULT_NOTIFICATION_MS));
        assert!(n.displayed_at.is_none());
    }

    #[test]
    fn test_notification_expiry() {
        let start = Instant::now();
        let mut n = Notification::info("Calling Bob").with_duration(Duration::from_millis(10));
        assert!(!n.is_expired_at(start + Duration::from_secs(1)));
        assert!(n.mark_displayed_at(start));
        assert!(!n.mark_displayed_at(start));
        assert!(!n.is_expired_at(start + Duration::from_millis(5)));
        assert!(n.is_expired_at(start + Duration::from_millis(11)));
    }

    #[test]
    fn test_queue_shows_one_at_a_time() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new(Duration::from_millis(100));
        queue.push(Notification::info("first"));
        queue.push(Notification::info("second"));

        assert!(!queue.tick(start));
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("first"));

        assert!(queue.tick(start + Duration::from_millis(150)));
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("second"));

        assert!(!queue.tick(start + Duration::from_millis(200)));
        assert!(queue.tick(start + Duration::from_millis(300)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_drops_oldest_hidden_entry_when_full() {
        let mut queue = NotificationQueue::default();
        for i in 0..MAX_PENDING_NOTIFICATIONS + 1 {
            queue.push(Notification::info(format!("n{}", i)));
        }
        assert_eq!(queue.len(), MAX_PENDING_NOTIFICATIONS);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("n0"));
        assert!(queue.pending.iter().all(|n| n.message != "n1"));
    }
}
