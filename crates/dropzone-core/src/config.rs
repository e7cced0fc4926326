//! Widget configuration read from the host element's attributes.

use serde::{Deserialize, Serialize};

/// Attribute holding the panel caption.
pub const TITLE_ATTRIBUTE: &str = "data-title";

/// Attribute holding the upload endpoint.
pub const UPLOAD_URL_ATTRIBUTE: &str = "upload-url";

/// Attribute holding the file-type tag forwarded with every upload.
pub const FILE_TYPE_ATTRIBUTE: &str = "file-type";

/// All attributes the widget reads, in the order it reads them.
pub const ATTRIBUTES: [&str; 3] = [TITLE_ATTRIBUTE, UPLOAD_URL_ATTRIBUTE, FILE_TYPE_ATTRIBUTE];

/// Caption shown when the title attribute is absent.
pub const DEFAULT_TITLE: &str = "Drag and Drop Uploader";

/// Configuration for one widget instance.
///
/// Read once when the widget attaches; later attribute changes are not
/// observed.
///
/// Absence and emptiness are kept distinct for the title and URL: an
/// absent title falls back to [`DEFAULT_TITLE`] while an empty one
/// renders as empty, and an absent URL targets the current document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Value of `data-title`, or `None` when the attribute is absent.
    pub title: Option<String>,

    /// Value of `upload-url`, or `None` when the attribute is absent.
    pub upload_url: Option<String>,

    /// Value of `file-type`, or the empty string when absent.
    pub file_type: String,
}

impl WidgetConfig {
    /// Build a configuration by looking up each attribute by name.
    ///
    /// `lookup` returns `None` for an absent attribute, mirroring
    /// `Element.getAttribute`.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            title: lookup(TITLE_ATTRIBUTE),
            upload_url: lookup(UPLOAD_URL_ATTRIBUTE),
            file_type: lookup(FILE_TYPE_ATTRIBUTE).unwrap_or_default(),
        }
    }

    /// The caption the panel should display.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}
