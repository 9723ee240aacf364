use shared::domain::{Notification, NotificationId};

pub const JUST_NOW_LABEL: &str = "Just now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeChange {
    Created(usize),
    Updated(usize),
    Removed,
    Unchanged,
}

impl BadgeChange {
    pub fn between(before: usize, after: usize) -> Self {
        match (before, after) {
            (b, a) if b == a => BadgeChange::Unchanged,
            (0, a) => BadgeChange::Created(a),
            (_, 0) => BadgeChange::Removed,
            (_, a) => BadgeChange::Updated(a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelToggle {
    Opened { badge: BadgeChange },
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Panel,
    Trigger,
    Elsewhere,
}

#[derive(Debug, Clone)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    next_id: i64,
    panel_open: bool,
}

impl NotificationCenter {
    /// `seed` is expected newest first.
    pub fn new(seed: Vec<Notification>) -> Self {
        let next_id = seed.iter().map(|n| n.id.0).max().unwrap_or(0) + 1;
        Self {
            notifications: seed,
            next_id,
            panel_open: false,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn badge_count(&self) -> Option<usize> {
        match self.unread_count() {
            0 => None,
            count => Some(count),
        }
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn add(&mut self, text: impl Into<String>) -> BadgeChange {
        let before = self.unread_count();
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.notifications.insert(
            0,
            Notification {
                id,
                text: text.into(),
                read: false,
                time: JUST_NOW_LABEL.to_string(),
            },
        );
        BadgeChange::between(before, self.unread_count())
    }

    pub fn mark_all_read(&mut self) -> BadgeChange {
        let before = self.unread_count();
        for notification in &mut self.notifications {
            notification.read = true;
        }
        BadgeChange::between(before, 0)
    }

    /// Closes an open panel untouched; opening it marks everything read first.
    pub fn toggle_panel(&mut self) -> PanelToggle {
        if self.panel_open {
            self.panel_open = false;
            return PanelToggle::Closed;
        }
        let badge = self.mark_all_read();
        self.panel_open = true;
        PanelToggle::Opened { badge }
    }

    /// Empties the list and closes the panel.
    pub fn clear_all(&mut self) {
        self.notifications.clear();
        self.panel_open = false;
    }

    /// Returns true when the interaction dismissed the panel.
    pub fn pointer_interaction(&mut self, target: PointerTarget) -> bool {
        if self.panel_open && target == PointerTarget::Elsewhere {
            self.panel_open = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_notifications;

    #[test]
    fn badge_transitions() {
        assert_eq!(BadgeChange::between(0, 1), BadgeChange::Created(1));
        assert_eq!(BadgeChange::between(2, 3), BadgeChange::Updated(3));
        assert_eq!(BadgeChange::between(3, 0), BadgeChange::Removed);
        assert_eq!(BadgeChange::between(0, 0), BadgeChange::Unchanged);
    }

    #[test]
    fn seed_unread_count_is_derived() {
        let center = NotificationCenter::new(seed_notifications());
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.badge_count(), Some(2));
    }

    #[test]
    fn added_notifications_get_fresh_increasing_ids() {
        let mut center = NotificationCenter::new(seed_notifications());
        center.add("first");
        center.add("second");

        let ids: Vec<i64> = center.notifications().iter().map(|n| n.id.0).collect();
        assert_eq!(&ids[..2], &[5, 4]);
        assert_eq!(center.notifications()[0].time, JUST_NOW_LABEL);
    }

    #[test]
    fn opening_marks_read_and_closing_leaves_state_alone() {
        let mut center = NotificationCenter::new(seed_notifications());

        assert_eq!(
            center.toggle_panel(),
            PanelToggle::Opened {
                badge: BadgeChange::Removed
            }
        );
        assert!(center.notifications().iter().all(|n| n.read));
        assert_eq!(center.badge_count(), None);

        assert_eq!(center.toggle_panel(), PanelToggle::Closed);
        assert_eq!(center.notifications().len(), 3);
        assert!(!center.is_panel_open());
    }

    #[test]
    fn clicks_outside_dismiss_but_trigger_and_panel_do_not() {
        let mut center = NotificationCenter::new(seed_notifications());
        assert!(!center.pointer_interaction(PointerTarget::Elsewhere));

        center.toggle_panel();
        assert!(!center.pointer_interaction(PointerTarget::Panel));
        assert!(!center.pointer_interaction(PointerTarget::Trigger));
        assert!(center.is_panel_open());
        assert!(center.pointer_interaction(PointerTarget::Elsewhere));
        assert!(!center.is_panel_open());
    }

    #[test]
    fn clear_all_empties_list_and_closes_panel() {
        let mut center = NotificationCenter::new(seed_notifications());
        center.toggle_panel();
        center.clear_all();

        assert!(center.notifications().is_empty());
        assert!(!center.is_panel_open());
        assert_eq!(center.badge_count(), None);

        assert_eq!(center.add("after clear"), BadgeChange::Created(1));
    }
}
