//! Actions offered by a share menu.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An action a user can pick from an open share menu.
///
/// The tag strings (`copy`, `repost`, `whatsapp`, `facebook`) are the
/// `data-action` values rendered into each menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ShareAction {
    /// Copy the item link to the clipboard
    Copy,
    /// Repost the item to the user's own feed
    Repost,
    /// Open a WhatsApp share link
    #[serde(rename = "whatsapp")]
    #[value(name = "whatsapp")]
    WhatsApp,
    /// Open the Facebook share dialog
    Facebook,
}

impl ShareAction {
    /// Every action, in menu display order.
    pub const ALL: [Self; 4] = [Self::Copy, Self::Repost, Self::WhatsApp, Self::Facebook];

    /// The tag used for this action in rendered markup and config files.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Repost => "repost",
            Self::WhatsApp => "whatsapp",
            Self::Facebook => "facebook",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Copy => "Copy link",
            Self::Repost => "Repost",
            Self::WhatsApp => "Share on WhatsApp",
            Self::Facebook => "Share on Facebook",
        }
    }

    /// Parse an action from its tag, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "copy" | "copy-link" => Some(Self::Copy),
            "repost" => Some(Self::Repost),
            "whatsapp" | "share-whatsapp" => Some(Self::WhatsApp),
            "facebook" | "share-facebook" => Some(Self::Facebook),
            _ => None,
        }
    }
}

impl fmt::Display for ShareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShareAction {
    type Err = crate::error::ShareMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| crate::error::ShareMenuError::UnknownAction(s.to_string()))
    }
}
