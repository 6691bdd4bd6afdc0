use std::sync::atomic::{AtomicBool, Ordering};

use sycamore::prelude::*;

use crate::{
    application::Application, components, consts::DATE_PICKER, router::AppRouter, styles, App,
    Error, Result,
};

/// Builds the fully configured application, ready to be mounted.
pub fn compose<G: Html>(router: AppRouter) -> Result<Application<G>> {
    let app = Application::new(|cx| view! { cx, App() })
        .install(router)
        .component(DATE_PICKER, components::date_picker::<G>)?
        .stylesheet(styles::DATE_PICKER)
        .stylesheet(styles::RESET)
        .stylesheet(styles::THEME);

    Ok(app)
}

/// Guards a startup sequence which may only run once.
pub struct Launch {
    started: AtomicBool,
}

impl Launch {
    pub const fn new() -> Self {
        Self {
            started: AtomicBool::new(false),
        }
    }

    /// Runs `f` on the first call, every later call fails with [`Error::AlreadyStarted`].
    ///
    /// A failed startup is not retried.
    pub fn run<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyStarted);
        }
        f()
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl Default for Launch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "browser")]
static LAUNCH: Launch = Launch::new();

/// Starts the application in the browser.
#[cfg(feature = "browser")]
pub fn start(config: &crate::Config) -> Result<crate::Mounted> {
    use sycamore::web::DomNode;

    use crate::host::BrowserHost;

    LAUNCH.run(|| {
        let host = BrowserHost::new()?;
        compose::<DomNode>(crate::router::create())?.mount(&host, &config.mount_selector)
    })
}

/// Renders the application for `path` into a complete HTML document.
#[cfg(any(test, feature = "ssr"))]
pub fn prerender(path: &str) -> Result<String> {
    use sycamore::web::SsrNode;

    use crate::{consts::MOUNT_SELECTOR, host::StaticHost};

    let host = StaticHost::with_element(MOUNT_SELECTOR.trim_start_matches('#'));
    compose::<SsrNode>(AppRouter::fixed(path))?.mount(&host, MOUNT_SELECTOR)?;
    Ok(host.render_document())
}

#[cfg(test)]
mod tests {
    use sycamore::web::SsrNode;

    use super::*;
    use crate::{consts::MOUNT_SELECTOR, host::StaticHost, router::AppRoute};

    fn mount_index(host: &StaticHost) -> Result<crate::Mounted> {
        compose::<SsrNode>(AppRouter::Fixed(AppRoute::Index))?.mount(host, MOUNT_SELECTOR)
    }

    #[test]
    fn composition() {
        let manifest = compose::<SsrNode>(AppRouter::Fixed(AppRoute::Index))
            .unwrap()
            .manifest();

        assert_eq!(manifest.router, Some(AppRouter::Fixed(AppRoute::Index)));
        assert_eq!(manifest.components, vec!["VueDatePicker"]);
        assert_eq!(manifest.stylesheets, vec!["date-picker", "reset", "theme"]);
    }

    #[test]
    fn mounts_once_into_target() {
        let host = StaticHost::with_element("app");
        let mounted = mount_index(&host).unwrap();

        assert_eq!(mounted.selector, "#app");
        assert_eq!(host.mount_count(), 1);

        let html = host.inner_html("app").unwrap();
        assert!(html.contains("class=\"app\""));
        assert!(html.contains("Pick a day"));
    }

    #[test]
    fn date_picker_resolves_by_name() {
        let host = StaticHost::with_element("app");
        mount_index(&host).unwrap();

        let html = host.inner_html("app").unwrap();
        assert!(html.contains("type=\"date\""));
        assert!(!html.contains("data-unknown-component"));
    }

    #[test]
    fn missing_target_fails() {
        let host = StaticHost::with_element("root");

        let err = mount_index(&host).unwrap_err();
        assert!(matches!(err, Error::MountTargetMissing(selector) if selector == "#app"));
        assert_eq!(host.mount_count(), 0);
        assert!(host.stylesheets().is_empty());
    }

    #[test]
    fn theme_overrides_reset() {
        let host = StaticHost::with_element("app");
        mount_index(&host).unwrap();

        assert_eq!(host.stylesheets(), vec!["date-picker", "reset", "theme"]);
        assert_eq!(host.computed_style("html", "line-height").as_deref(), Some("1.5"));
        assert_eq!(host.computed_style("h1", "margin").as_deref(), Some("0 0 1rem"));
        // only declared by the reset
        assert_eq!(host.computed_style("main", "display").as_deref(), Some("block"));
    }

    #[test]
    fn launch_runs_once() {
        let launch = Launch::new();
        assert!(!launch.is_started());

        assert_eq!(launch.run(|| Ok(1)).unwrap(), 1);
        assert!(launch.is_started());
        assert!(matches!(launch.run(|| Ok(2)), Err(Error::AlreadyStarted)));
    }

    #[test]
    fn failed_launch_is_not_retried() {
        let launch = Launch::new();

        let err = launch
            .run(|| mount_index(&StaticHost::empty()))
            .unwrap_err();
        assert!(matches!(err, Error::MountTargetMissing(_)));

        let host = StaticHost::with_element("app");
        assert!(matches!(
            launch.run(|| mount_index(&host)),
            Err(Error::AlreadyStarted)
        ));
        assert_eq!(host.mount_count(), 0);
    }

    #[test]
    fn prerender_day() {
        let html = prerender("/day/2026-01-02").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style data-stylesheet=\"theme\">"));
        assert!(html.contains("Friday, 2 January 2026"));
    }

    #[test]
    fn prerender_not_found() {
        let html = prerender("/nowhere/at/all").unwrap();
        assert!(html.contains("404 Not Found"));
    }
}
