//! Sandboxed embed of an external site with an open-externally escape hatch.
//!
//! TRADE-OFFS
//! ==========
//! The embedded site may refuse framing or lose features under the sandbox.
//! The host page cannot observe either case, so the external link is always
//! visible instead of being shown on failure.

#[cfg(test)]
#[path = "external_frame_test.rs"]
mod external_frame_test;

use leptos::prelude::*;

/// Capabilities granted to embedded content; nothing else is allowed.
pub const SANDBOX_CAPABILITIES: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

/// `rel` for every link that opens the embedded site in a new tab.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

#[component]
pub fn ExternalFrame(
    /// Absolute URL of the embedded site.
    url: &'static str,
    /// Accessible frame title.
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="external-frame" data-testid="somaliscan-container">
            <div class="external-frame__chrome">
                <span class="external-frame__dots">
                    <span></span>
                    <span></span>
                    <span></span>
                </span>
                <span class="external-frame__url">{url}</span>
                <a
                    class="external-frame__open"
                    href=url
                    target="_blank"
                    rel=EXTERNAL_LINK_REL
                    data-testid="somaliscan-external"
                >
                    "Open in new tab ↗"
                </a>
            </div>
            <iframe
                class="external-frame__viewport"
                src=url
                title=title
                sandbox=SANDBOX_CAPABILITIES
                data-testid="somaliscan-iframe"
            ></iframe>
        </div>
        <p class="external-frame__note">
            "Note: Some features may be limited within the embedded view. "
            <a href=url target="_blank" rel=EXTERNAL_LINK_REL>
                "Visit the full site"
            </a>
            " for complete functionality."
        </p>
    }
}
