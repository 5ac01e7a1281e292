use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::use_site;

const CONTACT_EMAIL: &str = "hello@devblog.com";

/// Static "Contact" page with the ways to reach the authors.
#[component]
pub fn Contact() -> impl IntoView {
    let title = use_site().config.site.title.clone();

    view! {
      <Title text=format!("Contact - {title}") />
      <Meta name="description" content=format!("Get in touch with the {title} team.") />

      <section class="devblog-page">
        <h1>"Get in Touch"</h1>
        <p>
          "Have a question, a topic suggestion, or want to contribute an article? We'd love to hear from you."
        </p>

        <dl class="devblog-contact">
          <dt>"Email"</dt>
          <dd>
            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
          </dd>
          <dt>"Response time"</dt>
          <dd>"We usually reply within two business days."</dd>
        </dl>
      </section>
    }
}
