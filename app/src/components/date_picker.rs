use sycamore::prelude::*;

use crate::{date, registry::ComponentProps};

/// Date input registered as a global component.
///
/// Supported attributes: `min`, `max` (inclusive, `YYYY-MM-DD`) and `placeholder`.
/// The selected date is written to the `model` signal as `YYYY-MM-DD`, an empty string means no date.
pub fn date_picker<G: Html>(cx: Scope, mut props: ComponentProps) -> View<G> {
    let model = props
        .take_model()
        .unwrap_or_else(|| create_rc_signal(String::new()));
    let model = create_ref(cx, model);

    let min = props.get("min").and_then(date::parse);
    let max = props.get("max").and_then(date::parse);
    let placeholder = props.get("placeholder").unwrap_or_default().to_owned();

    let validity = create_memo(cx, move || date::check(&model.get(), min, max));
    let class = create_memo(cx, move || {
        if validity.get().is_valid() {
            "dp-input"
        } else {
            "dp-input dp-invalid"
        }
    });
    let message = create_memo(cx, move || validity.get().message());

    let pick_today = move |_: web_sys::Event| {
        if let Some(today) = date::today() {
            model.set(date::format_iso(today));
        }
    };
    let clear = move |_: web_sys::Event| model.set(String::new());

    let min = min.map(date::format_iso).unwrap_or_default();
    let max = max.map(date::format_iso).unwrap_or_default();
    let value: &Signal<String> = model;

    view! { cx,
        div(class="dp") {
            input(
                type="date",
                class=*class.get(),
                min=min,
                max=max,
                placeholder=placeholder,
                bind:value=value,
            )
            button(type="button", class="dp-action", on:click=pick_today) { "Today" }
            button(type="button", class="dp-action", on:click=clear) { "Clear" }
            span(class="dp-message") { (message.get().to_string()) }
        }
    }
}
