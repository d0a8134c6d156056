//! SVG icon components using Phosphor Icons.
//!
//! The page asks for icons by logical name only. [`IconName`] maps each name to
//! inline SVG path data from the [Phosphor Icons](https://phosphoricons.com/)
//! library (Regular weight, 256x256 viewBox).

use leptos::prelude::*;
use serde::Serialize;

/// Icons the page knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    /// Open book (E-books Library)
    Book,
    /// Group of people (Community)
    Users,
    /// Page with lines (Writing Tools)
    FileText,
    /// Trophy (Reading Challenges)
    Award,
    /// Hamburger; the header's closed-menu button
    Menu,
    /// Cross; the header's open-menu button
    Close,
    /// Footer link marker
    ChevronRight,
}

impl IconName {
    /// SVG path data (the `d` attribute value)
    pub fn path(self) -> &'static str {
        match self {
            IconName::Book => ICON_BOOK,
            IconName::Users => ICON_USERS,
            IconName::FileText => ICON_FILE_TEXT,
            IconName::Award => ICON_TROPHY,
            IconName::Menu => ICON_LIST,
            IconName::Close => ICON_X,
            IconName::ChevronRight => ICON_CARET_RIGHT,
        }
    }

    /// Accessible label for icon-only buttons.
    pub fn label(self) -> &'static str {
        match self {
            IconName::Book => "book",
            IconName::Users => "users",
            IconName::FileText => "document",
            IconName::Award => "award",
            IconName::Menu => "Open menu",
            IconName::Close => "Close menu",
            IconName::ChevronRight => "chevron",
        }
    }
}

/// Renders a named icon as inline SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Book size="48" class="feature-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    name: IconName,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=name.path()></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

const ICON_BOOK: &str = "M208,24H72A32,32,0,0,0,40,56V224a8,8,0,0,0,8,8H192a8,8,0,0,0,0-16H56a16,16,0,0,1,16-16H208a8,8,0,0,0,8-8V32A8,8,0,0,0,208,24Zm-8,160H72a31.82,31.82,0,0,0-16,4.29V56A16,16,0,0,1,72,40H200Z";

const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

const ICON_FILE_TEXT: &str = "M213.66,82.34l-56-56A8,8,0,0,0,152,24H56A16,16,0,0,0,40,40V216a16,16,0,0,0,16,16H200a16,16,0,0,0,16-16V88A8,8,0,0,0,213.66,82.34ZM160,51.31,188.69,80H160ZM200,216H56V40h88V88a8,8,0,0,0,8,8h48V216Zm-32-80a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,136Zm0,32a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,168Z";

const ICON_TROPHY: &str = "M232,64H208V56a16,16,0,0,0-16-16H64A16,16,0,0,0,48,56v8H24A16,16,0,0,0,8,80V96a40,40,0,0,0,40,40h3.65A80.13,80.13,0,0,0,120,191.61V216H96a8,8,0,0,0,0,16h64a8,8,0,0,0,0-16H136V191.58c31.94-3.23,58.44-25.64,68.08-55.58H208a40,40,0,0,0,40-40V80A16,16,0,0,0,232,64ZM48,120A24,24,0,0,1,24,96V80H48v32q0,4,.39,8Zm144-8.9c0,35.52-29,64.64-64,64.9a64,64,0,0,1-64-64V56H192ZM232,96a24,24,0,0,1-24,24h-.5a81.81,81.81,0,0,0,.5-8.9V80h24Z";

const ICON_LIST: &str = "M224,128a8,8,0,0,1-8,8H40a8,8,0,0,1,0-16H216A8,8,0,0,1,224,128ZM40,72H216a8,8,0,0,0,0-16H40a8,8,0,0,0,0,16ZM216,184H40a8,8,0,0,0,0,16H216a8,8,0,0,0,0-16Z";

const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

const ICON_CARET_RIGHT: &str = "M181.66,133.66l-80,80a8,8,0,0,1-11.32-11.32L164.69,128,90.34,53.66a8,8,0,0,1,11.32-11.32l80,80A8,8,0,0,1,181.66,133.66Z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_named_icon_with_size_and_color() {
        let html = view! { <Icon name=IconName::Close size="32" color="#EAD8B1" /> }.to_html();

        assert!(html.contains("<svg"));
        assert!(html.contains("width=\"32\""));
        assert!(html.contains("#EAD8B1"));
        assert!(html.contains(ICON_X));
    }

    #[test]
    fn every_icon_has_distinct_path_data() {
        let all = [
            IconName::Book,
            IconName::Users,
            IconName::FileText,
            IconName::Award,
            IconName::Menu,
            IconName::Close,
            IconName::ChevronRight,
        ];
        let mut paths: Vec<_> = all.iter().map(|icon| icon.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), all.len());
    }
}
