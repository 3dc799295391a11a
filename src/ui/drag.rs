use crate::error::Result;
use std::collections::HashMap;

/// Payload type carrying a project id
pub const PLAIN_TEXT: &str = "text/plain";

/// Operations a drag source permits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    None,
    Copy,
    Move,
    Link,
    #[default]
    All,
}

/// Data carried by a drag gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    types: Vec<String>,
    data: HashMap<String, String>,
    pub effect_allowed: EffectAllowed,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`; declared types keep first-set order
    pub fn set_data(&mut self, format: &str, data: &str) {
        if !self.types.iter().any(|t| t == format) {
            self.types.push(format.to_string());
        }
        self.data.insert(format.to_string(), data.to_string());
    }

    /// Payload for `format`, or an empty string when absent
    pub fn get_data(&self, format: &str) -> String {
        self.data.get(format).cloned().unwrap_or_default()
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// True when the first declared type is plain text
    pub fn carries_plain_text(&self) -> bool {
        self.types.first().map(String::as_str) == Some(PLAIN_TEXT)
    }
}

/// Something that can be picked up
pub trait Draggable {
    fn drag_start_handler(&self, transfer: &mut DataTransfer);
    fn drag_end_handler(&self, transfer: &DataTransfer);
}

/// Something a dragged item can be dropped onto
pub trait DragTarget {
    /// Returns true when the payload is accepted
    fn drag_over_handler(&self, transfer: &DataTransfer) -> Result<bool>;
    fn drop_handler(&self, transfer: &DataTransfer) -> Result<()>;
    fn drag_leave_handler(&self) -> Result<()>;
}
