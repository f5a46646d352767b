use crate::foundation::error::{ReelError, ReelResult};

/// User-supplied audio file as seen by the preview.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFile {
    /// File name for display.
    pub name: String,
    /// MIME type reported for the file.
    pub mime_type: String,
}

impl AudioFile {
    /// Describe a file by name and MIME type.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Return `true` for `audio/*` MIME types.
    pub fn is_audio(&self) -> bool {
        self.mime_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("audio/")
    }
}

/// Identifier of a transient playable handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandleId(pub String);

/// Source of transient playable handles (object URLs, temp mappings, ...).
pub trait HandleIssuer {
    /// Create a handle for `file`.
    fn issue(&mut self, file: &AudioFile) -> ReelResult<HandleId>;

    /// Revoke a handle previously returned by [`HandleIssuer::issue`].
    fn release(&mut self, id: &HandleId);
}

/// Owns the selected audio file and its transient handle.
///
/// Selecting a new file, clearing, and dropping the manager each release the previous handle
/// exactly once.
pub struct AudioResourceManager<I: HandleIssuer> {
    issuer: I,
    current: Option<(AudioFile, HandleId)>,
}

impl<I: HandleIssuer> AudioResourceManager<I> {
    /// Manager with nothing selected.
    pub fn new(issuer: I) -> Self {
        Self {
            issuer,
            current: None,
        }
    }

    /// Select `file`, replacing and releasing any previous selection.
    ///
    /// Non-audio files are rejected and leave the current selection untouched.
    pub fn select(&mut self, file: AudioFile) -> ReelResult<&HandleId> {
        if !file.is_audio() {
            return Err(ReelError::validation(format!(
                "'{}' is not an audio file ({})",
                file.name, file.mime_type
            )));
        }
        let id = self
            .issuer
            .issue(&file)
            .map_err(|e| ReelError::audio(format!("issue handle for '{}': {e}", file.name)))?;
        tracing::debug!(file = %file.name, handle = %id.0, "audio selected");

        self.release_current();
        Ok(&self.current.insert((file, id)).1)
    }

    /// Drop the current selection, releasing its handle.
    pub fn clear(&mut self) {
        self.release_current();
    }

    /// Selected file, if any.
    pub fn current_file(&self) -> Option<&AudioFile> {
        self.current.as_ref().map(|(file, _)| file)
    }

    /// Handle of the selected file, if any.
    pub fn current_handle(&self) -> Option<&HandleId> {
        self.current.as_ref().map(|(_, id)| id)
    }

    /// The handle issuer.
    pub fn issuer(&self) -> &I {
        &self.issuer
    }

    fn release_current(&mut self) {
        if let Some((file, id)) = self.current.take() {
            tracing::debug!(file = %file.name, handle = %id.0, "releasing audio handle");
            self.issuer.release(&id);
        }
    }
}

impl<I: HandleIssuer> Drop for AudioResourceManager<I> {
    fn drop(&mut self) {
        self.release_current();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/manager.rs"]
mod tests;
