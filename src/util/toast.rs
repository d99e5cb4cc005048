//! Transient toast notifications.
//!
//! Fire-and-forget: a styled `<div>` is appended to `<body>` and removed
//! after its duration elapses. No acknowledgment, no queueing. Requires a
//! browser environment; server-side this is a no-op.

/// Toast severity, mapped to a CSS modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[cfg(feature = "hydrate")]
impl Severity {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// Show a toast for `duration_ms` milliseconds.
pub fn show(severity: Severity, message: &str, duration_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(el) = document.create_element("div") else {
            return;
        };
        el.set_class_name(severity.class());
        el.set_text_content(Some(message));
        if body.append_child(&el).is_err() {
            return;
        }

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            el.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (severity, message, duration_ms);
    }
}
