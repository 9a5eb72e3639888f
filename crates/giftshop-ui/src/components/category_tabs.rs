//! Category Tabs Component
//!
//! Horizontal row of category tabs used to filter the gift list.
//! Exactly one tab is active at a time.

use dioxus::prelude::*;
use giftshop_core::GiftCategory;

/// Properties for the CategoryTabs component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryTabsProps {
    /// Categories in display order, catch-all first
    pub categories: Vec<GiftCategory>,
    /// Alias of the active tab
    pub selected: String,
    /// Handler called with the alias of the clicked tab
    pub on_select: EventHandler<String>,
}

/// Tab label as printed on the page
pub fn tab_label(category: &GiftCategory) -> String {
    category.name.to_uppercase()
}

/// CSS class of a tab
pub fn tab_class(is_active: bool) -> &'static str {
    if is_active {
        "tabs__item tabs__item--active"
    } else {
        "tabs__item"
    }
}

/// Displays a row of selectable category tabs
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "all".to_string());
///
/// rsx! {
///     CategoryTabs {
///         categories: CategoryTable::default().iter().cloned().collect(),
///         selected: selected(),
///         on_select: move |alias| selected.set(alias)
///     }
/// }
/// ```
#[component]
pub fn CategoryTabs(props: CategoryTabsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        nav {
            class: "tabs",
            role: "tablist",
            "aria-label": "Gift categories",
            for category in props.categories.iter() {
                {
                    let alias = category.alias.clone();
                    let is_active = selected == category.alias;
                    let label = tab_label(category);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{category.alias}",
                            class: tab_class(is_active),
                            role: "tab",
                            "data-tab": "{category.alias}",
                            "aria-selected": if is_active { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(alias.clone());
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
