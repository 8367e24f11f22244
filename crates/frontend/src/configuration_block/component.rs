use super::{config, initializer};
use contracts::tab_panel::GroupId;
use leptos::html;
use leptos::prelude::*;

/// One tab of a [`ConfigurationBlock`].
#[derive(Clone)]
pub struct ConfigTab {
    pub title: String,
    pub content: ViewFn,
}

impl ConfigTab {
    pub fn new(title: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Renders the same markup the static pages use and enhances it once mounted,
/// so a Leptos page gets identical tabs without running the page initializer.
#[component]
pub fn ConfigurationBlock(
    /// Tabs in display order; the first one starts active
    tabs: Vec<ConfigTab>,
) -> impl IntoView {
    let list_ref = NodeRef::<html::Ul>::new();
    let group_id = StoredValue::new(None::<GroupId>);

    Effect::new(move |_| {
        if let Some(list) = list_ref.get() {
            if let Some(id) = initializer::enhance_list(&list, &config::load()) {
                group_id.set_value(Some(id));
            }
        }
    });

    // The page registry outlives the component; drop the group with the list.
    on_cleanup(move || {
        if let Some(id) = group_id.try_get_value().flatten() {
            initializer::release(id);
        }
    });

    view! {
        <div class="configuration-block">
            <ul node_ref=list_ref>
                {tabs
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <li>
                                <em>{tab.title}</em>
                                <div>{tab.content.run()}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
