use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::error::LensStateError;

/// The type of the installed lens.
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
#[num_enum(error_type(name = LensStateError, constructor = LensStateError::invalid_lens_type))]
#[repr(u8)]
pub enum LensType {
    /// The lens supports Auto Focus (AF). The focus point can be controlled
    /// from software.
    AutoFocus = 0,
    /// The lens supports only Manual Focus (MF). The focus point cannot be
    /// controlled from software.
    ManualFocusOnly = 1,
    /// The lens model could not be classified.
    Unknown = 2,
}
