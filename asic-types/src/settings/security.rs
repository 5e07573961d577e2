//! Production hardening flags.

use serde::Serialize;

/// Value of the `X-Frame-Options` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FrameOptions {
    Deny,
}

impl FrameOptions {
    pub fn header_value(&self) -> &'static str {
        match self {
            FrameOptions::Deny => "DENY",
        }
    }
}

/// Transport and header hardening.
///
/// Only two shapes exist: everything on, or everything off. Use
/// [`SecuritySettings::for_debug`] to pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecuritySettings {
    pub ssl_redirect: bool,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
    pub browser_xss_filter: bool,
    pub content_type_nosniff: bool,
    pub x_frame_options: Option<FrameOptions>,
}

impl SecuritySettings {
    pub fn production() -> Self {
        Self {
            ssl_redirect: true,
            session_cookie_secure: true,
            csrf_cookie_secure: true,
            browser_xss_filter: true,
            content_type_nosniff: true,
            x_frame_options: Some(FrameOptions::Deny),
        }
    }

    pub fn development() -> Self {
        Self {
            ssl_redirect: false,
            session_cookie_secure: false,
            csrf_cookie_secure: false,
            browser_xss_filter: false,
            content_type_nosniff: false,
            x_frame_options: None,
        }
    }

    pub fn for_debug(debug: bool) -> Self {
        if debug {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// True when every hardening flag is enabled.
    pub fn is_hardened(&self) -> bool {
        *self == Self::production()
    }
}
