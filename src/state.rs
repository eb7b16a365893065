use serde::{Deserialize, Serialize};

use crate::focus::{LensFocusMode, LensFocusStatus};
use crate::lens_type::LensType;

/// Lens-specific attributes of a snapshot.
///
/// Only meaningful when a lens is installed. Produced by the
/// camera-communication layer and sealed into a [`LensState`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LensDetails {
    /// Capability class of the installed lens
    pub lens_type: LensType,

    /// The AF switch on the lens is on. When true, the focus mode can be
    /// changed and the focus point controlled from software.
    pub is_auto_focus_switch_on: bool,

    /// Current focus mode
    pub focus_mode: LensFocusMode,

    /// Status of the current focus operation
    pub focus_status: LensFocusStatus,

    /// Focus assistant enabled for manual focus mode
    pub is_focus_assistant_enabled_for_manual_focus: bool,

    /// Focus assistant enabled for auto focus mode
    pub is_focus_assistant_enabled_for_auto_focus: bool,

    /// The focus assistant target is currently zoomed
    pub is_focus_assistant_working: bool,
}

impl Default for LensDetails {
    fn default() -> Self {
        Self {
            lens_type: LensType::Unknown,
            is_auto_focus_switch_on: false,
            focus_mode: LensFocusMode::Unknown,
            focus_status: LensFocusStatus::Idle,
            is_focus_assistant_enabled_for_manual_focus: false,
            is_focus_assistant_enabled_for_auto_focus: false,
            is_focus_assistant_working: false,
        }
    }
}

/// Immutable snapshot of the camera lens' state.
///
/// Every attribute except [`is_lens_installed`](Self::is_lens_installed) is
/// undefined when no lens is installed. Reading those attributes is still
/// safe; they return whatever the producer stored. Prefer
/// [`details`](Self::details), which returns `None` in that case.
///
/// ```rust
/// use lens_state::{LensDetails, LensFocusStatus, LensState, LensType};
///
/// let state = LensState::installed(LensDetails {
///     lens_type: LensType::AutoFocus,
///     is_auto_focus_switch_on: true,
///     focus_status: LensFocusStatus::Focusing,
///     ..LensDetails::default()
/// });
///
/// if let Some(details) = state.details() {
///     assert_eq!(details.focus_status, LensFocusStatus::Focusing);
/// }
/// ```
///
/// A snapshot never changes after construction. Fields are private:
///
/// ```compile_fail
/// use lens_state::LensState;
///
/// let mut state = LensState::not_installed();
/// state.is_lens_installed = true;
/// ```
///
/// and `details()` only lends a shared reference:
///
/// ```compile_fail
/// use lens_state::{LensDetails, LensFocusStatus, LensState};
///
/// let state = LensState::installed(LensDetails::default());
/// state.details().unwrap().focus_status = LensFocusStatus::Idle;
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LensState {
    is_lens_installed: bool,

    #[serde(flatten)]
    details: LensDetails,
}

impl LensState {
    /// Create a snapshot from a fully populated set of attributes
    pub fn new(is_lens_installed: bool, details: LensDetails) -> Self {
        Self {
            is_lens_installed,
            details,
        }
    }

    /// Snapshot of an installed lens
    pub fn installed(details: LensDetails) -> Self {
        Self::new(true, details)
    }

    /// Snapshot reporting that no lens is attached
    pub fn not_installed() -> Self {
        Self::new(false, LensDetails::default())
    }

    /// Whether a lens is attached to the camera. Always defined.
    pub fn is_lens_installed(&self) -> bool {
        self.is_lens_installed
    }

    /// Lens-specific attributes, or `None` when no lens is installed
    pub fn details(&self) -> Option<&LensDetails> {
        self.is_lens_installed.then_some(&self.details)
    }

    /// Installed lens type. If the lens is not installed, the value is undefined.
    pub fn lens_type(&self) -> LensType {
        self.details.lens_type
    }

    /// AF switch on the lens. If the lens is not installed, the value is undefined.
    pub fn is_auto_focus_switch_on(&self) -> bool {
        self.details.is_auto_focus_switch_on
    }

    /// Current focus mode. If the lens is not installed, the value is undefined.
    pub fn focus_mode(&self) -> LensFocusMode {
        self.details.focus_mode
    }

    /// Focus status. If the lens is not installed, the value is undefined.
    pub fn focus_status(&self) -> LensFocusStatus {
        self.details.focus_status
    }

    /// Focus assistant enabled for MF. If the lens is not installed, the value is undefined.
    pub fn is_focus_assistant_enabled_for_manual_focus(&self) -> bool {
        self.details.is_focus_assistant_enabled_for_manual_focus
    }

    /// Focus assistant enabled for AF. If the lens is not installed, the value is undefined.
    pub fn is_focus_assistant_enabled_for_auto_focus(&self) -> bool {
        self.details.is_focus_assistant_enabled_for_auto_focus
    }

    /// Focus target is zoomed. If the lens is not installed, the value is undefined.
    pub fn is_focus_assistant_working(&self) -> bool {
        self.details.is_focus_assistant_working
    }
}
