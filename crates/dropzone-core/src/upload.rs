//! Upload requests, their outcomes, and the seams the dispatcher talks
//! through.
//!
//! Nothing here performs I/O. A [`Transport`] turns an [`UploadRequest`]
//! into a real HTTP request and later reports exactly one
//! [`UploadOutcome`]; a [`Notifier`] shows the resulting message; a
//! [`Selection`] is cleared after a successful upload.

/// HTTP method of every upload.
pub const METHOD: &str = "POST";

/// Multipart field carrying the file content.
///
/// Must match the property name the receiving server binds the file
/// collection to.
pub const FILE_FIELD: &str = "FileDetails";

/// Multipart field carrying the file-type tag.
pub const FILE_TYPE_FIELD: &str = "FileType";

/// Header marking the request as script-initiated.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// Value of [`REQUESTED_WITH_HEADER`].
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// A user-selected file. The widget only ever needs its name; content is
/// passed through to the transport untouched.
pub trait FileHandle {
    /// The file's name as reported by the browser.
    fn name(&self) -> String;
}

/// One multipart form field.
#[derive(Debug, PartialEq, Eq)]
pub enum FormField<'a, F> {
    /// Binary file content, sent with the file's own name as filename.
    File {
        /// Field name.
        name: &'static str,
        /// File to send.
        file: &'a F,
    },
    /// A plain string field.
    Text {
        /// Field name.
        name: &'static str,
        /// Field value.
        value: &'a str,
    },
}

/// Everything a transport needs to send one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest<F> {
    url: Option<String>,
    file: F,
    file_type: String,
    index: usize,
}

impl<F> UploadRequest<F> {
    /// Build the request for `file` at position `index`.
    pub fn new(url: Option<String>, file: F, file_type: String, index: usize) -> Self {
        Self {
            url,
            file,
            file_type,
            index,
        }
    }

    /// Configured target URL. `None` means the current document.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The file being uploaded.
    pub const fn file(&self) -> &F {
        &self.file
    }

    /// Value sent in [`FILE_TYPE_FIELD`]; empty when unconfigured.
    #[must_use]
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Zero-based position of the file within its batch.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Headers to set on the request, in order.
    #[must_use]
    pub const fn headers(&self) -> [(&'static str, &'static str); 1] {
        [(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)]
    }

    /// Multipart fields in the order they are appended.
    ///
    /// The type field is always present so the server sees an empty
    /// string rather than a missing field when no tag is configured.
    pub fn fields(&self) -> [FormField<'_, F>; 2] {
        [
            FormField::File {
                name: FILE_FIELD,
                file: &self.file,
            },
            FormField::Text {
                name: FILE_TYPE_FIELD,
                value: &self.file_type,
            },
        ]
    }

    /// Consume the request, returning the file.
    pub fn into_file(self) -> F {
        self.file
    }
}

/// How one upload ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The server answered with a 2xx status.
    Success {
        /// HTTP status code.
        status: u16,
    },
    /// The server answered with a non-2xx status.
    ServerError {
        /// HTTP status code.
        status: u16,
        /// The status text the server sent, shown to the user.
        status_text: String,
    },
    /// No response was received.
    TransportError,
}

impl UploadOutcome {
    /// Classify a completed response.
    ///
    /// Status `0` means the browser completed the request without a
    /// response (blocked, aborted, or a failed CORS check) and counts as
    /// a transport error.
    #[must_use]
    pub fn from_response(status: u16, status_text: &str) -> Self {
        match status {
            0 => Self::TransportError,
            200..=299 => Self::Success { status },
            _ => Self::ServerError {
                status,
                status_text: status_text.to_owned(),
            },
        }
    }

    /// Returns `true` for [`Success`](Self::Success).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Whether the picker's selection should be cleared.
    ///
    /// Only success clears it; after a failure the user can retry
    /// without choosing the file again.
    #[must_use]
    pub const fn clears_selection(&self) -> bool {
        self.is_success()
    }

    /// The message shown to the user for a file named `file_name`.
    #[must_use]
    pub fn message(&self, file_name: &str) -> String {
        match self {
            Self::Success { .. } => format!("File '{file_name}' uploaded successfully."),
            Self::ServerError { status_text, .. } => {
                format!("Upload failed for '{file_name}': {status_text}")
            }
            Self::TransportError => {
                format!("Error uploading file '{file_name}'. Please try again.")
            }
        }
    }
}

/// Completion callback handed to a [`Transport`].
pub type Completion = Box<dyn FnOnce(UploadOutcome)>;

/// Sends upload requests.
///
/// `send` must return without waiting for the response and must call
/// `on_complete` exactly once, later, with the outcome. Requests are
/// independent: a transport must not order or serialize them.
pub trait Transport {
    /// File handle type the transport can send.
    type File: FileHandle;

    /// Start sending `request`.
    fn send(&self, request: UploadRequest<Self::File>, on_complete: Completion);
}

/// Shows a message to the user.
pub trait Notifier {
    /// Display `message`.
    fn notify(&self, message: &str);
}

/// The picker's current selection.
pub trait Selection {
    /// Forget the selected files so a later `change` does not reuse them.
    fn clear(&self);
}
