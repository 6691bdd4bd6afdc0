use sycamore::prelude::*;

#[component]
pub fn NotFoundPage<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        section(class="not-found") {
            h1 { "404 Not Found" }
            a(href="/") { "Pick a day" }
        }
    }
}
