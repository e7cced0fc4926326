//! Browser implementations of the dispatcher's user-facing seams.

use dropzone_core::{Notifier, Selection};
use web_sys::HtmlInputElement;

/// Shows upload results with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        gloo_dialogs::alert(message);
    }
}

/// The picker input's selection. Clearing it resets the input's value
/// so choosing the same file again still fires `change`.
#[derive(Debug, Clone)]
pub struct PickerSelection(pub HtmlInputElement);

impl Selection for PickerSelection {
    fn clear(&self) {
        self.0.set_value("");
    }
}
