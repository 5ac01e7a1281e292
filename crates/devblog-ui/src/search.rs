//! Listing filter components: the search bar and the tag filter.

use leptos::prelude::*;

/// Search input bound to a query signal.
#[component]
pub fn SearchBar(
    /// Signal holding the current search term.
    query: RwSignal<String>,
    /// Placeholder text for the input.
    #[prop(default = "Search articles by title, content, or tags...".to_string())]
    placeholder: String,
) -> impl IntoView {
    view! {
      <div class="devblog-search">
        <input
          type="search"
          class="devblog-search-input"
          placeholder=placeholder
          prop:value=move || query.get()
          on:input=move |ev| {
            query.set(event_target_value(&ev));
          }
        />
        <Show when=move || !query.get().is_empty()>
          <button
            class="devblog-search-clear"
            aria-label="Clear search"
            on:click=move |_| query.set(String::new())
          >
            "×"
          </button>
        </Show>
      </div>
    }
}

/// Tag selector: an "All Posts" button followed by one button per tag.
///
/// The empty string in `selected` means no tag filter.
#[component]
pub fn TagFilter(
    /// Tags to offer, in display order.
    tags: Vec<String>,
    /// Signal holding the selected tag.
    selected: RwSignal<String>,
) -> impl IntoView {
    view! {
      <div class="devblog-tag-filter" role="group" aria-label="Filter by tag">
        <button
          class=move || tag_button_class(selected.get().is_empty())
          on:click=move |_| selected.set(String::new())
        >
          "All Posts"
        </button>
        {tags
          .into_iter()
          .map(|tag| {
            let label = tag.clone();
            let value = tag.clone();
            view! {
              <button
                class=move || tag_button_class(selected.get() == tag)
                on:click=move |_| selected.set(value.clone())
              >
                {label}
              </button>
            }
          })
          .collect_view()}
      </div>
    }
}

fn tag_button_class(active: bool) -> &'static str {
    if active {
        "devblog-tag-button devblog-tag-button-active"
    } else {
        "devblog-tag-button"
    }
}
