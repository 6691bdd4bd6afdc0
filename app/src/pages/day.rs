use sycamore::prelude::*;

use crate::date;

#[derive(Prop)]
pub struct DayPageProps {
    date: String,
}

#[component]
pub fn DayPage<G: Html>(cx: Scope, props: DayPageProps) -> View<G> {
    let Some(day) = date::parse(&props.date) else {
        let message = format!("'{}' is not a valid day", props.date);
        return view! { cx,
            section(class="day") {
                p(class="error") { (message) }
                a(href="/") { "Pick another day" }
            }
        };
    };

    let title = date::format_long(day);
    let link = |day: Option<time::Date>| day.map(|day| format!("/day/{}", date::format_iso(day)));
    let previous = link(day.previous_day());
    let next = link(day.next_day());

    view! { cx,
        section(class="day") {
            h1 { (title) }
            nav(class="day-nav") {
                (match previous.clone() {
                    Some(href) => view! { cx, a(href=href) { "Previous day" } },
                    None => View::empty(),
                })
                a(href="/") { "Back" }
                (match next.clone() {
                    Some(href) => view! { cx, a(href=href) { "Next day" } },
                    None => View::empty(),
                })
            }
        }
    }
}
