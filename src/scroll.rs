use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config;

/// Smooth-scrolls to the element matching `href` (an in-page `#anchor`).
/// Unknown anchors are ignored.
pub fn scroll_to_section(href: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    match document.query_selector(href) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::debug!("No section for anchor {}", href),
        Err(err) => log::warn!("Bad anchor selector {}: {:?}", href, err),
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }
}
