//! Usage: Tray menu actions and the visibility mirror behind the Show/Hide item.

pub const TRAY_MENU_TOGGLE_ID: &str = "tray.toggle";
pub const TRAY_MENU_ADDRESS_ID: &str = "tray.address";
pub const TRAY_MENU_QUIT_ID: &str = "tray.quit";

const LABEL_HIDE: &str = "Hide";
const LABEL_SHOW: &str = "Show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    ToggleVisibility,
    DaemonAddress,
    Quit,
}

impl TrayAction {
    pub fn from_menu_id(id: &str) -> Option<Self> {
        match id {
            TRAY_MENU_TOGGLE_ID => Some(Self::ToggleVisibility),
            TRAY_MENU_ADDRESS_ID => Some(Self::DaemonAddress),
            TRAY_MENU_QUIT_ID => Some(Self::Quit),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn menu_id(self) -> &'static str {
        match self {
            Self::ToggleVisibility => TRAY_MENU_TOGGLE_ID,
            Self::DaemonAddress => TRAY_MENU_ADDRESS_ID,
            Self::Quit => TRAY_MENU_QUIT_ID,
        }
    }
}

/// Icon shown next to the Show/Hide item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    WindowClose,
    WindowNew,
}

/// Mirrors main-window visibility; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrayState {
    visible: bool,
}

impl TrayState {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn show(&mut self) -> bool {
        self.visible = true;
        self.visible
    }

    pub fn hide(&mut self) -> bool {
        self.visible = false;
        self.visible
    }

    /// Flips from the actual window visibility, which may have drifted (e.g. minimized).
    pub fn toggle_from(&mut self, window_visible: bool) -> bool {
        if window_visible {
            self.hide()
        } else {
            self.show()
        }
    }

    #[cfg(test)]
    pub fn toggle(&mut self) -> bool {
        self.toggle_from(self.visible)
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            LABEL_HIDE
        } else {
            LABEL_SHOW
        }
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        if self.visible {
            ToggleIcon::WindowClose
        } else {
            ToggleIcon::WindowNew
        }
    }
}

impl Default for TrayState {
    fn default() -> Self {
        Self::new(true)
    }
}
