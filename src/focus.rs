//! # Focus enumerations
//!
//! The focus mode selected on the camera and the status of the lens' current
//! focus operation.
//!
//! `LensFocusStatus` usually moves `Idle -> Focusing -> Success | Failure` and
//! back to `Idle` or `Focusing` on the next focus request. The camera drives
//! those transitions; nothing here checks them.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::error::LensStateError;

/// The focusing status of the camera's lens.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[num_enum(error_type(name = LensStateError, constructor = LensStateError::invalid_focus_status))]
#[repr(u8)]
pub enum LensFocusStatus {
    /// No focus target has been set.
    Idle = 0x00,
    /// The lens is focusing on the target.
    Focusing = 0x01,
    /// The lens focused on the target.
    Success = 0x02,
    /// The lens failed to focus on the target, e.g. because the target is too
    /// close or has no distinguishable detail (a white wall).
    Failure = 0x03,
}

/// Focus mode currently selected on the camera.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[num_enum(error_type(name = LensStateError, constructor = LensStateError::invalid_focus_mode))]
#[repr(u8)]
pub enum LensFocusMode {
    /// Manual focus. The user adjusts focus on the lens.
    Manual = 0x00,
    /// Auto focus. The focus point can be set from software.
    Auto = 0x01,
    /// The camera reported a mode it could not name.
    Unknown = 0xFF,
}
