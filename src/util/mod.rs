//! Browser utility helpers: credential token storage and transient toasts.

pub mod storage;
pub mod toast;
