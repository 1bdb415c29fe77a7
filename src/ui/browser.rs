//! Page-level browser side effects

/// Full-page navigation to an external URL
pub fn redirect_to(url: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            leptos::logging::error!("Redirect to {} failed: {:?}", url, err);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = url;
    }
}

/// Smooth-scroll to the element with `id`
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        if let Some(element) = element {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}
