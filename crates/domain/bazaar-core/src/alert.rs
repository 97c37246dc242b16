use serde::{Deserialize, Serialize};

pub type AlertId = uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
    Loading,
}

/// Fixed visual treatment for an alert kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertVisual {
    pub icon: &'static str,
    pub class: &'static str,
    pub accent_rgb: [u8; 3],
}

impl AlertKind {
    pub fn visual(self) -> AlertVisual {
        match self {
            AlertKind::Success => AlertVisual {
                icon: "\u{2714}",
                class: "alert-success",
                accent_rgb: [34, 197, 94],
            },
            AlertKind::Error => AlertVisual {
                icon: "\u{2716}",
                class: "alert-error",
                accent_rgb: [225, 29, 72],
            },
            AlertKind::Warning => AlertVisual {
                icon: "\u{26A0}",
                class: "alert-warning",
                accent_rgb: [250, 204, 21],
            },
            AlertKind::Info => AlertVisual {
                icon: "\u{2139}",
                class: "alert-info",
                accent_rgb: [125, 211, 252],
            },
            AlertKind::Loading => AlertVisual {
                icon: "\u{27F3}",
                class: "alert-loading",
                accent_rgb: [160, 160, 160],
            },
        }
    }

    /// Loading alerts stay until they are replaced or removed.
    pub fn auto_dismisses(self) -> bool {
        !matches!(self, AlertKind::Loading)
    }
}

/// What a caller hands to the alert queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub id: Option<AlertId>,
    pub kind: AlertKind,
    pub title: Option<String>,
    pub message: String,
    pub dismissible: bool,
    /// Milliseconds until auto-dismiss; 0 keeps the alert until removed.
    pub duration_ms: u64,
}

impl AlertRequest {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        let duration_ms = if kind.auto_dismisses() {
            bazaar_config::DEFAULT_ALERT_DURATION_MS
        } else {
            0
        };
        Self {
            id: None,
            kind,
            title: None,
            message: message.into(),
            dismissible: true,
            duration_ms,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, message)
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(AlertKind::Loading, message)
    }

    pub fn with_id(mut self, id: AlertId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn persistent(self) -> Self {
        self.with_duration_ms(0)
    }

    pub fn non_dismissible(mut self) -> Self {
        self.dismissible = false;
        self
    }
}

/// A queued alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub id: AlertId,
    pub kind: AlertKind,
    pub title: Option<String>,
    pub message: String,
    pub dismissible: bool,
    pub duration_ms: u64,
    pub exiting: bool,
}

impl AlertRecord {
    pub fn from_request(id: AlertId, req: AlertRequest) -> Self {
        Self {
            id,
            kind: req.kind,
            title: req.title,
            message: req.message,
            dismissible: req.dismissible,
            duration_ms: req.duration_ms,
            exiting: false,
        }
    }

    /// Whether a countdown applies. Never true for loading alerts, whatever
    /// duration they were given.
    pub fn expires(&self) -> bool {
        self.duration_ms > 0 && self.kind.auto_dismisses()
    }
}
