use serde::Deserialize;

/// Generic mutation envelope: `{success, message|error}`. The server's
/// free-text string is displayed verbatim in the status region.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiStatus {
    /// Server text for display, `message` taking precedence over `error`.
    pub fn text(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(if self.success {
                "Done."
            } else {
                "Request failed."
            })
    }
}

#[cfg(test)]
mod tests {
    use super::ApiStatus;

    #[test]
    fn message_takes_precedence_over_error() {
        let status = ApiStatus {
            success: false,
            message: Some("saved".into()),
            error: Some("boom".into()),
        };
        assert_eq!(status.text(), "saved");
    }

    #[test]
    fn falls_back_to_error_then_default() {
        let status = ApiStatus {
            success: false,
            message: None,
            error: Some("boom".into()),
        };
        assert_eq!(status.text(), "boom");

        let bare = ApiStatus::default();
        assert_eq!(bare.text(), "Request failed.");

        let ok = ApiStatus {
            success: true,
            ..ApiStatus::default()
        };
        assert_eq!(ok.text(), "Done.");
    }
}
