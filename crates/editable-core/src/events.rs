//! Notifications emitted to the host and the outcome of handling an event.

/// Notifications a widget emits.
///
/// `name()` gives the host-facing event name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    KeyUp,
    KeyDown,
    KeyPress,
    Enter,
    Escape,
    InsertNewline,
    FocusIn,
    FocusOut,
    MouseEnter,
    MouseLeave,
    /// The bound value was committed from the element's content.
    ValueChanged,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 11] = [
        NotificationKind::KeyUp,
        NotificationKind::KeyDown,
        NotificationKind::KeyPress,
        NotificationKind::Enter,
        NotificationKind::Escape,
        NotificationKind::InsertNewline,
        NotificationKind::FocusIn,
        NotificationKind::FocusOut,
        NotificationKind::MouseEnter,
        NotificationKind::MouseLeave,
        NotificationKind::ValueChanged,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NotificationKind::KeyUp => "key-up",
            NotificationKind::KeyDown => "key-down",
            NotificationKind::KeyPress => "key-press",
            NotificationKind::Enter => "enter",
            NotificationKind::Escape => "escape",
            NotificationKind::InsertNewline => "insert-newline",
            NotificationKind::FocusIn => "focus-in",
            NotificationKind::FocusOut => "focus-out",
            NotificationKind::MouseEnter => "mouse-enter",
            NotificationKind::MouseLeave => "mouse-leave",
            NotificationKind::ValueChanged => "value-changed",
        }
    }

    /// Look up a kind by its host-facing name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Result of handling one DOM event.
///
/// Notifications are returned rather than fired so the caller can deliver
/// them after it stops borrowing the synchronizer; a host callback is then
/// free to read or write the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host should call `preventDefault` on the event.
    pub prevented: bool,
    /// Notifications to deliver, in order.
    pub notifications: Vec<NotificationKind>,
}

impl EventOutcome {
    pub fn pass() -> Self {
        Self::default()
    }

    pub fn prevented() -> Self {
        Self {
            prevented: true,
            ..Self::default()
        }
    }

    pub fn notify(mut self, kind: NotificationKind) -> Self {
        self.notifications.push(kind);
        self
    }

    pub(crate) fn push(&mut self, kind: NotificationKind) {
        self.notifications.push(kind);
    }

    pub(crate) fn prevent(&mut self) {
        self.prevented = true;
    }

    pub fn contains(&self, kind: NotificationKind) -> bool {
        self.notifications.contains(&kind)
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications.iter().filter(|k| **k == kind).count()
    }
}
