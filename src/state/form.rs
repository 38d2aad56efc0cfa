#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// State for the public submission form.
///
/// The selected file blobs themselves are browser objects and live in the
/// page; this model tracks everything else, including one preview URL per
/// selected file.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub name: String,
    pub social_media_handle: String,
    pub previews: Vec<String>,
    pub submitting: bool,
    pub message: String,
}

impl FormState {
    /// Append previews for a newly picked batch of files.
    ///
    /// Selection is cumulative: picking more files never replaces what is
    /// already selected, so previews grow in lock-step with the selected
    /// set. Nothing is de-duplicated.
    pub fn append_previews(&mut self, urls: impl IntoIterator<Item = String>) {
        self.previews.extend(urls);
    }

    /// Mark a submit attempt as started.
    ///
    /// Returns `false` if an earlier submission is still in flight, in
    /// which case nothing changes.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.message.clear();
        true
    }

    /// Apply a successful submission response.
    ///
    /// Clears both text fields and replaces the previews with exactly the
    /// URLs the server stored. The page clears its selected blobs at the
    /// same time.
    pub fn complete(&mut self, uploaded: Vec<String>) {
        self.name.clear();
        self.social_media_handle.clear();
        self.previews = uploaded;
        self.submitting = false;
        self.message = "Form submitted successfully!".to_owned();
    }

    /// Apply a failed submission.
    ///
    /// User input, selection, and previews are left untouched so the user
    /// can retry; only the message changes.
    pub fn fail(&mut self, message: &str) {
        self.submitting = false;
        self.message = message.to_owned();
    }
}
