//! Window title management: reflects the document title.

use autosize_common::ReportChannel;

use super::core::AutosizeApp;

/// Format: "{base} - {page}", or just `base` when the page has no title.
pub(super) fn compose_title(base: &str, page: &str) -> String {
    let page = page.trim();
    if page.is_empty() || page == base {
        base.to_string()
    } else {
        format!("{base} - {page}")
    }
}

impl AutosizeApp {
    /// Update the window title from the document title.
    ///
    /// With the title report channel the document title carries size
    /// reports, so the configured title is shown unchanged.
    pub(super) fn update_window_title(&self) {
        let (Some(window), Some(view)) = (self.window.as_ref(), self.view.as_ref()) else {
            return;
        };

        let base = &self.config.window.title;
        let title = match view.controller().props().report_channel {
            ReportChannel::Title => base.clone(),
            ReportChannel::Ipc => compose_title(base, view.handle().current_title()),
        };
        if window.title() != title {
            window.set_title(&title);
        }
    }
}
