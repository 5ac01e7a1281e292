mod about;
mod contact;
mod home;
mod post;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use post::Post;

use leptos::prelude::*;
use leptos_meta::Title;

/// Fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text="Page Not Found" />
      <section class="devblog-not-found">
        <h1>"Page Not Found"</h1>
        <p>"The page you're looking for doesn't exist."</p>
        <a href="/" class="devblog-button">
          "Back to Home"
        </a>
      </section>
    }
}
