use sycamore::prelude::*;

mod application;
mod bootstrap;
mod components;
mod config;
mod consts;
#[cfg(any(test, feature = "ssr"))]
mod css;
mod date;
mod error;
mod host;
mod pages;
mod registry;
mod router;
mod styles;

pub use self::application::{Application, Manifest, Mounted, Plugin, Root};
#[cfg(any(test, feature = "ssr"))]
pub use self::bootstrap::prerender;
#[cfg(feature = "browser")]
pub use self::bootstrap::start;
pub use self::bootstrap::{compose, Launch};
pub use self::config::Config;
pub use self::consts::{DATE_PICKER, MOUNT_SELECTOR};
pub use self::error::*;
#[cfg(feature = "browser")]
pub use self::host::BrowserHost;
#[cfg(any(test, feature = "ssr"))]
pub use self::host::StaticHost;
pub use self::host::{Host, MountRequest};
pub use self::registry::{resolve, ComponentFn, ComponentProps, ComponentRegistry};
pub use self::router::{AppRoute, AppRouter, RouterView};
pub use self::styles::Stylesheet;

#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    view! { cx,
        div(class="app") {
            header(class="app-header") {
                a(href="/") { "Datebook" }
            }
            main(class="app-main") {
                RouterView()
            }
        }
    }
}
