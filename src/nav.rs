/// Where a navigation action takes the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Root,
    /// In-page fragment, including the leading `#`.
    Anchor(&'static str),
    External(&'static str),
}

impl NavTarget {
    pub fn href(&self) -> &'static str {
        match self {
            NavTarget::Root => "/",
            NavTarget::Anchor(fragment) => *fragment,
            NavTarget::External(url) => *url,
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self, NavTarget::External(_))
    }

    /// Value for the anchor's `target` attribute.
    pub fn link_target(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("_blank")
    }

    /// Value for the anchor's `rel` attribute.
    pub fn link_rel(&self) -> Option<&'static str> {
        self.opens_new_tab().then_some("noopener noreferrer")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    /// devicon font class rendered before the label
    pub icon: Option<&'static str>,
    pub target: NavTarget,
}

impl NavAction {
    pub const fn new(label: &'static str, icon: Option<&'static str>, target: NavTarget) -> Self {
        Self {
            label,
            icon,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    Open,
    Close,
    Escape,
    /// `on_backdrop` is false when the click landed on a descendant.
    BackdropClick { on_backdrop: bool },
    Select,
}

impl SidebarEvent {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(SidebarEvent::Escape)
    }
}

/// Open/closed state of the mobile slide-in panel. The backdrop is rendered exactly when the panel is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn shows_backdrop(&self) -> bool {
        self.open
    }

    /// Applies an event and reports whether the state changed.
    pub fn apply(&mut self, event: SidebarEvent) -> bool {
        let next = match event {
            SidebarEvent::Open => true,
            SidebarEvent::BackdropClick { on_backdrop: false } => self.open,
            SidebarEvent::Close
            | SidebarEvent::Escape
            | SidebarEvent::BackdropClick { on_backdrop: true }
            | SidebarEvent::Select => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> SidebarState {
        let mut s = SidebarState::default();
        s.apply(SidebarEvent::Open);
        s
    }

    #[test]
    fn test_open_renders_backdrop() {
        let s = opened();
        assert!(s.is_open());
        assert!(s.shows_backdrop());
    }

    #[test]
    fn test_closing_events() {
        for event in [
            SidebarEvent::Close,
            SidebarEvent::Escape,
            SidebarEvent::BackdropClick { on_backdrop: true },
            SidebarEvent::Select,
        ] {
            let mut s = opened();
            assert!(s.apply(event), "{event:?} should close");
            assert!(!s.is_open());
            assert!(!s.shows_backdrop());
        }
    }

    #[test]
    fn test_click_inside_panel_keeps_open() {
        let mut s = opened();
        assert!(!s.apply(SidebarEvent::BackdropClick { on_backdrop: false }));
        assert!(s.is_open());
    }

    #[test]
    fn test_events_on_closed_sidebar_are_noops() {
        let mut s = SidebarState::default();
        assert!(!s.apply(SidebarEvent::Escape));
        assert!(!s.apply(SidebarEvent::Select));
        assert!(!s.is_open());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(SidebarEvent::from_key("Escape"), Some(SidebarEvent::Escape));
        assert_eq!(SidebarEvent::from_key("Enter"), None);
        assert_eq!(SidebarEvent::from_key("escape"), None);
    }

    #[test]
    fn test_targets() {
        assert_eq!(NavTarget::Root.href(), "/");
        assert_eq!(NavTarget::Anchor("#about").href(), "#about");
        let linkedin = NavTarget::External("https://example.com");
        assert!(linkedin.opens_new_tab());
        assert_eq!(linkedin.link_target(), Some("_blank"));
        assert_eq!(NavTarget::Anchor("#contact").link_rel(), None);
    }
}
