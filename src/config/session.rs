use serde::{Deserialize, Serialize};

/// The vendor whose dashboard is being viewed.
///
/// Loaded once in `main` and handed to the commands that need it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Session {
    pub vendor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
}

impl Session {
    pub fn display_name(&self) -> String {
        match &self.vendor_name {
            Some(name) => format!("{} ({})", name, self.vendor_id),
            None => self.vendor_id.clone(),
        }
    }
}
