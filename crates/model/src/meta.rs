use serde::{Deserialize, Serialize};

/// Traffic-steering metadata attached to an answer.
///
/// The steering pipeline reads these values when shuffling and trimming
/// answers; the model only carries them. Absent fields stay off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Meta {
    /// True when no field is set; empty metadata is not serialized.
    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.weight.is_none() && self.priority.is_none() && self.note.is_none()
    }
}
