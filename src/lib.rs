//! # Lens State
//!
//! Read-only snapshots of an interchangeable camera lens on a drone: whether a
//! lens is attached, its focus capability, focus mode and status, and the
//! focus assistant state.
//!
//! Snapshots are produced by the camera-communication layer through a
//! [`LensStateSource`] and only read by application code.
//!
//! # Quick Start
//!
//! ```rust
//! use lens_state::{LensDetails, LensFocusMode, LensFocusStatus, LensState, LensType};
//!
//! fn describe(state: &LensState) -> String {
//!     match state.details() {
//!         None => "no lens".to_string(),
//!         Some(details) => format!("{} lens, {}", details.lens_type, details.focus_status),
//!     }
//! }
//!
//! let state = LensState::installed(LensDetails {
//!     lens_type: LensType::AutoFocus,
//!     is_auto_focus_switch_on: true,
//!     focus_mode: LensFocusMode::Auto,
//!     focus_status: LensFocusStatus::Success,
//!     ..LensDetails::default()
//! });
//!
//! assert_eq!(describe(&state), "auto_focus lens, success");
//! assert_eq!(describe(&LensState::not_installed()), "no lens");
//! ```

pub mod config;
pub mod error;
pub mod focus;
pub mod lens_type;
pub mod source;
pub mod state;

pub use config::{LensStateConfig, CONFIG_FILENAME, DEFAULT_SUPPORTED_CAMERAS};
pub use error::{LensStateError, Result};
pub use focus::{LensFocusMode, LensFocusStatus};
pub use lens_type::LensType;
pub use source::{LensStateChannel, LensStateSource, LensStateStream};
pub use state::{LensDetails, LensState};
