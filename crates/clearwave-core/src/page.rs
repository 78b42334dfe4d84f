//! Result-region presentation state and audio rendering.

use crate::constants::AUDIO_MIME_TYPE;
use crate::models::SubmissionResult;

/// The page region that receives the rendered processing result.
///
/// The region is owned state handed explicitly to the submission flow, so the
/// flow can be exercised without a rendering environment. `replace` swaps the
/// whole contents; under overlapping submissions the final contents are
/// whichever completion ran last.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultRegion {
    contents: String,
}

impl ResultRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region's contents wholesale.
    pub fn replace(&mut self, html: impl Into<String>) {
        self.contents = html.into();
    }

    /// Render the playable element for a processing result into the region.
    pub fn show_audio(&mut self, result: &SubmissionResult) {
        self.replace(audio_element(&result.denoised_url));
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

/// Render a playable audio element for a processed resource URL.
pub fn audio_element(url: &str) -> String {
    format!(
        r#"<audio controls><source src="{}" type="{}"></audio>"#,
        escape_attribute(url),
        AUDIO_MIME_TYPE
    )
}

/// Escape a value for interpolation into a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
