use sycamore::prelude::*;

use crate::{
    consts::DATE_PICKER,
    date,
    registry::{resolve, ComponentProps},
};

#[component]
pub fn IndexPage<G: Html>(cx: Scope) -> View<G> {
    let model = create_rc_signal(String::new());
    let picker = resolve(
        cx,
        DATE_PICKER,
        ComponentProps::new()
            .attr("placeholder", "Pick a day")
            .model(model.clone()),
    );

    let model = create_ref(cx, model);
    let selected = create_memo(cx, move || date::parse(&model.get()));
    let summary = create_memo(cx, move || match *selected.get() {
        Some(day) => date::format_long(day),
        None => "No day selected".to_owned(),
    });

    view! { cx,
        section(class="index") {
            h1 { "Pick a day" }
            (picker)
            p(class="summary") { (summary.get().to_string()) }
            (match *selected.get() {
                Some(day) => {
                    let href = format!("/day/{}", date::format_iso(day));
                    view! { cx, a(href=href) { "Open day" } }
                }
                None => View::empty(),
            })
        }
    }
}
