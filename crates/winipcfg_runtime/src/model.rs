//! Window-chrome state for the single winipcfg window and its taskbar icon.

/// Accessible label of the maximize button while the window is not maximized.
pub const MAXIMIZE_LABEL: &str = "Maximize";
/// Accessible label of the maximize button while the window is maximized.
pub const RESTORE_LABEL: &str = "Restore";

/// Geometry the window occupies when it is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    /// Identity transform.
    #[default]
    Normal,
    /// Integer-scaled to fill the viewport.
    Maximized,
}

/// Display mode of the window.
///
/// Minimized remembers the geometry it was entered from so a restore can replay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    #[default]
    Normal,
    Maximized,
    Minimized {
        restore: Geometry,
    },
}

impl WindowMode {
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized { .. })
    }

    /// Geometry shown now, or the one a restore would return to.
    pub fn geometry(self) -> Geometry {
        match self {
            Self::Normal => Geometry::Normal,
            Self::Maximized => Geometry::Maximized,
            Self::Minimized { restore } => restore,
        }
    }

    pub fn minimized_from(self) -> Self {
        Self::Minimized {
            restore: self.geometry(),
        }
    }
}

impl From<Geometry> for WindowMode {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Normal => Self::Normal,
            Geometry::Maximized => Self::Maximized,
        }
    }
}

/// CSS `display` values the chrome toggles between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Hidden,
}

impl Display {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Hidden => "none",
        }
    }
}

/// Absolute `left`/`top` position of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementPosition {
    pub left: i32,
    pub top: i32,
}

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Top-left corner of an element's bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
}

/// Layout measurements needed by the maximize geometry.
///
/// Window sizes are layout sizes (`offsetWidth`/`offsetHeight`), unaffected by transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromeMetrics {
    pub window_width: f64,
    pub window_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

/// Inline style of the window element.
///
/// `None` leaves the server-rendered style in place; a property is only written once some
/// transition has assigned it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowVisual {
    pub display: Option<Display>,
    pub transform: Option<String>,
    pub transform_origin: Option<&'static str>,
    pub opacity: Option<&'static str>,
    pub position: Option<ElementPosition>,
}

/// Inline style and marker classes of the taskbar icon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconVisual {
    pub display: Option<Display>,
    /// `selected` class.
    pub selected: bool,
    /// `restored` class, sequencing the icon's entrance animation.
    pub restored: bool,
    pub position: Option<ElementPosition>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChromeState {
    pub mode: WindowMode,
    pub window: WindowVisual,
    pub icon: IconVisual,
    pub maximize_label: Option<&'static str>,
    /// Incremented by every user-initiated transition. Follow-up steps carry the epoch they were
    /// scheduled in and are rejected once it has moved on.
    pub transition_epoch: u64,
}

impl ChromeState {
    pub(crate) fn begin_transition(&mut self) -> u64 {
        self.transition_epoch = self.transition_epoch.wrapping_add(1);
        self.transition_epoch
    }

    pub(crate) fn show_window(&mut self) {
        self.window.display = Some(Display::Block);
    }

    pub(crate) fn show_icon(&mut self) {
        self.icon.display = Some(Display::Block);
    }

    pub(crate) fn hide_window(&mut self) {
        self.window.display = Some(Display::Hidden);
    }

    pub(crate) fn hide_icon(&mut self) {
        self.icon.display = Some(Display::Hidden);
    }
}

/// Element moved by a drag handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Window, dragged by its title bar.
    Window,
    /// Icon, dragged by itself.
    Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Pointer position relative to the element's `left`/`top` at drag start.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    /// Whether the document-wide selection dismiss listener is installed.
    pub selection_dismiss_armed: bool,
}
