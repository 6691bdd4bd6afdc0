use sycamore::{
    prelude::*,
    reactive::{provide_context_ref, try_use_context},
};
use sycamore_router::{HistoryIntegration, Router, StaticRouter};

use crate::{
    application::{Application, Plugin, Root},
    pages::{DayPage, IndexPage, NotFoundPage},
};

#[derive(Clone, Debug, PartialEq, Eq, sycamore_router::Route)]
pub enum AppRoute {
    #[to("/")]
    Index,
    #[to("/day/<date>")]
    Day(String),
    #[not_found]
    NotFound,
}

impl AppRoute {
    pub fn resolve(path: &str) -> Self {
        use sycamore_router::Route;
        Self::default().match_path(path)
    }
}

/// Router attached to the application as a plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRouter {
    /// Follows the browser location and history.
    History,
    /// Always renders a single route, used for prerendering.
    Fixed(AppRoute),
}

impl AppRouter {
    pub fn fixed(path: &str) -> Self {
        Self::Fixed(AppRoute::resolve(path))
    }

    /// Wraps the root, the current route is available to [`RouterView`] as context.
    pub(crate) fn render<G: Html>(self, cx: Scope, root: Root<G>) -> View<G> {
        match self {
            Self::History => view! { cx,
                Router(
                    integration=HistoryIntegration::new(),
                    view=move |cx, route: &ReadSignal<AppRoute>| {
                        provide_context_ref(cx, route);
                        root(cx)
                    },
                )
            },
            Self::Fixed(route) => view! { cx,
                StaticRouter(
                    route=route,
                    view=move |cx, route: &ReadSignal<AppRoute>| {
                        provide_context_ref(cx, route);
                        root(cx)
                    },
                )
            },
        }
    }
}

impl<G: Html> Plugin<G> for AppRouter {
    fn install(self, app: &mut Application<G>) {
        app.set_router(self);
    }
}

/// The router the browser application starts with.
#[cfg(feature = "browser")]
pub fn create() -> AppRouter {
    AppRouter::History
}

/// Renders the page of the current route.
#[component]
pub fn RouterView<G: Html>(cx: Scope) -> View<G> {
    let Some(route) = try_use_context::<ReadSignal<AppRoute>>(cx) else {
        tracing::warn!("RouterView used without a router");
        return View::empty();
    };

    view! { cx,
        (match route.get().as_ref() {
            AppRoute::Index => view! { cx, IndexPage() },
            AppRoute::Day(date) => {
                let date = date.clone();
                view! { cx, DayPage(date=date) }
            }
            AppRoute::NotFound => view! { cx, NotFoundPage() },
        })
    }
}
