//! Overlay (drawer) state machine.
//!
//! A single-slot overlay: at most one auxiliary panel (create form,
//! edit form, detail view) is presented at a time. The transition
//! function is a pure reducer; focus management, scroll locking and
//! the rest of the presentation concerns belong to whoever observes
//! the state, not to the machine itself.
//!
//! Size is sticky: closing keeps the last-used size, and opening
//! without an explicit size keeps it too. Content and title are not.

/// Drawer panel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

/// Which auxiliary panel the drawer presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerContent {
    CreatePatient,
    EditPatient { id: String },
    PatientDetail { id: String },
}

/// Drawer state as a tagged variant. `Closed` still carries a size so
/// the last-used value survives a close/reopen cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerState {
    Closed {
        size: DrawerSize,
    },
    Open {
        content: DrawerContent,
        title: Option<String>,
        size: DrawerSize,
    },
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::Closed {
            size: DrawerSize::default(),
        }
    }
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn size(&self) -> DrawerSize {
        match self {
            Self::Closed { size } | Self::Open { size, .. } => *size,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Open { title, .. } => title.as_deref(),
            Self::Closed { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&DrawerContent> {
        match self {
            Self::Open { content, .. } => Some(content),
            Self::Closed { .. } => None,
        }
    }
}

/// Transition requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerAction {
    Open {
        content: DrawerContent,
        title: Option<String>,
        size: Option<DrawerSize>,
    },
    Close,
}

/// Pure transition function: `(state, action) → state`, no side effects.
///
/// `Open` from any state replaces content and title (last-call-wins,
/// no queuing). `Close` clears both but keeps the size.
pub fn reduce(state: DrawerState, action: DrawerAction) -> DrawerState {
    match action {
        DrawerAction::Open {
            content,
            title,
            size,
        } => DrawerState::Open {
            content,
            title,
            size: size.unwrap_or(state.size()),
        },
        DrawerAction::Close => DrawerState::Closed { size: state.size() },
    }
}

/// Owned handle pairing the state with its two dispatchers, the shape
/// the presentation layer consumes.
#[derive(Debug, Default)]
pub struct Drawer {
    state: DrawerState,
}

impl Drawer {
    /// A closed drawer at the default size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    pub fn open(&mut self, content: DrawerContent, title: Option<String>, size: Option<DrawerSize>) {
        self.state = reduce(
            std::mem::take(&mut self.state),
            DrawerAction::Open {
                content,
                title,
                size,
            },
        );
    }

    pub fn close(&mut self) {
        self.state = reduce(std::mem::take(&mut self.state), DrawerAction::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed_md() {
        let drawer = Drawer::new();
        assert!(!drawer.state().is_open());
        assert_eq!(drawer.state().size(), DrawerSize::Md);
        assert!(drawer.state().title().is_none());
        assert!(drawer.state().content().is_none());
    }

    #[test]
    fn open_sets_content_title_and_size() {
        let mut drawer = Drawer::new();
        drawer.open(
            DrawerContent::CreatePatient,
            Some("New patient".into()),
            Some(DrawerSize::Lg),
        );

        assert!(drawer.state().is_open());
        assert_eq!(drawer.state().title(), Some("New patient"));
        assert_eq!(drawer.state().content(), Some(&DrawerContent::CreatePatient));
        assert_eq!(drawer.state().size(), DrawerSize::Lg);
    }

    #[test]
    fn open_twice_is_last_call_wins() {
        let mut drawer = Drawer::new();
        drawer.open(DrawerContent::CreatePatient, Some("Create".into()), None);
        drawer.open(
            DrawerContent::PatientDetail { id: "7".into() },
            Some("Details".into()),
            None,
        );

        assert_eq!(
            drawer.state().content(),
            Some(&DrawerContent::PatientDetail { id: "7".into() })
        );
        assert_eq!(drawer.state().title(), Some("Details"));
    }

    #[test]
    fn close_clears_content_and_title() {
        let mut drawer = Drawer::new();
        drawer.open(
            DrawerContent::EditPatient { id: "1".into() },
            Some("Edit".into()),
            None,
        );
        drawer.close();

        assert!(!drawer.state().is_open());
        assert!(drawer.state().title().is_none());
        assert!(drawer.state().content().is_none());
    }

    #[test]
    fn size_is_sticky_across_close_and_reopen() {
        let mut drawer = Drawer::new();
        drawer.open(DrawerContent::CreatePatient, None, Some(DrawerSize::Lg));
        drawer.close();
        assert_eq!(drawer.state().size(), DrawerSize::Lg);

        drawer.open(DrawerContent::PatientDetail { id: "2".into() }, None, None);
        assert_eq!(drawer.state().size(), DrawerSize::Lg, "size not reset to md");
    }

    #[test]
    fn explicit_size_overrides_sticky_value() {
        let mut drawer = Drawer::new();
        drawer.open(DrawerContent::CreatePatient, None, Some(DrawerSize::Xl));
        drawer.open(DrawerContent::CreatePatient, None, Some(DrawerSize::Sm));
        assert_eq!(drawer.state().size(), DrawerSize::Sm);
    }

    #[test]
    fn close_on_closed_drawer_is_a_no_op() {
        let mut drawer = Drawer::new();
        drawer.close();
        assert_eq!(*drawer.state(), DrawerState::default());
    }

    #[test]
    fn reduce_is_pure_and_deterministic() {
        let action = DrawerAction::Open {
            content: DrawerContent::CreatePatient,
            title: None,
            size: Some(DrawerSize::Sm),
        };
        let a = reduce(DrawerState::default(), action.clone());
        let b = reduce(DrawerState::default(), action);
        assert_eq!(a, b);
    }
}
