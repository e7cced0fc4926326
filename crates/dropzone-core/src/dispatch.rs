//! The upload dispatcher: one request per file, one notification per
//! outcome.

use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::intake::{self, FileCollection, FileSource};
use crate::upload::{FileHandle, Notifier, Selection, Transport, UploadOutcome, UploadRequest};

/// Fans files out to a [`Transport`] and reports each outcome.
///
/// Every call to [`upload`](Self::upload) starts an independent request
/// and returns immediately. Outcomes arrive later, in whatever order the
/// transport completes them.
pub struct Dispatcher<T, N, S> {
    config: WidgetConfig,
    transport: T,
    notifier: Rc<N>,
    selection: Rc<S>,
}

impl<T, N, S> Dispatcher<T, N, S>
where
    T: Transport,
    N: Notifier + 'static,
    S: Selection + 'static,
{
    /// Create a dispatcher for one widget instance.
    pub fn new(config: WidgetConfig, transport: T, notifier: N, selection: S) -> Self {
        Self {
            config,
            transport,
            notifier: Rc::new(notifier),
            selection: Rc::new(selection),
        }
    }

    /// The configuration this dispatcher was built with.
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Upload one file.
    ///
    /// `index` is the file's position in its batch. It is carried on the
    /// request for callers that want to order feedback; the dispatcher
    /// itself imposes no ordering.
    pub fn upload(&self, file: T::File, index: usize) {
        let name = file.name();
        let request = UploadRequest::new(
            self.config.upload_url.clone(),
            file,
            self.config.file_type.clone(),
            index,
        );
        tracing::debug!(
            file = %name,
            index,
            url = request.url().unwrap_or("<document>"),
            "dispatching upload"
        );

        let notifier = Rc::clone(&self.notifier);
        let selection = Rc::clone(&self.selection);
        self.transport.send(
            request,
            Box::new(move |outcome| {
                report(&name, index, &outcome, &*notifier, &*selection);
            }),
        );
    }

    /// Upload every file in `files`, in selection order.
    ///
    /// Returns the number of uploads dispatched. An empty collection
    /// dispatches nothing.
    pub fn handle_files<C>(&self, source: FileSource, files: &C) -> usize
    where
        C: FileCollection<File = T::File> + ?Sized,
    {
        let files = intake::normalize(files);
        let count = files.len();
        tracing::debug!(%source, count, "received files");
        for (index, file) in files.into_iter().enumerate() {
            self.upload(file, index);
        }
        count
    }
}

/// Tell the user how an upload ended and clear the picker on success.
fn report<N, S>(name: &str, index: usize, outcome: &UploadOutcome, notifier: &N, selection: &S)
where
    N: Notifier + ?Sized,
    S: Selection + ?Sized,
{
    match outcome {
        UploadOutcome::Success { status } => {
            tracing::info!(file = %name, index, status, "upload succeeded");
        }
        UploadOutcome::ServerError {
            status,
            status_text,
        } => {
            tracing::warn!(file = %name, index, status, status_text = %status_text, "upload rejected");
        }
        UploadOutcome::TransportError => {
            tracing::warn!(file = %name, index, "upload did not reach the server");
        }
    }
    notifier.notify(&outcome.message(name));
    if outcome.clears_selection() {
        selection.clear();
    }
}
