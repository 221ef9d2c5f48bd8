//! Input tabs

use serde::{Deserialize, Serialize};

/// The three mutually exclusive ways to supply content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    File,
    Text,
    Url,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::File, Tab::Text, Tab::Url];

    pub const fn label(&self) -> &'static str {
        match self {
            Tab::File => "Upload",
            Tab::Text => "Text",
            Tab::Url => "URL",
        }
    }
}
