use std::rc::Rc;

use sycamore::{prelude::*, reactive::provide_context};

use crate::{
    host::{Host, MountRequest},
    registry::{ComponentFn, ComponentRegistry},
    router::AppRouter,
    styles::Stylesheet,
    Result,
};

/// Root definition of the application tree.
pub type Root<G> = Rc<dyn Fn(Scope<'_>) -> View<G>>;

/// Extends an [`Application`] while it is being configured.
pub trait Plugin<G: Html> {
    fn install(self, app: &mut Application<G>);
}

/// Summary of a configured application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    pub router: Option<AppRouter>,
    pub components: Vec<&'static str>,
    pub stylesheets: Vec<&'static str>,
}

/// Returned by a successful mount.
///
/// The application itself is owned by the host from this point on.
#[derive(Debug)]
pub struct Mounted {
    pub selector: String,
    pub manifest: Manifest,
}

/// An application instance in its configuration phase.
///
/// Plugins, components and stylesheets can only be added before [`Application::mount`],
/// which consumes the instance.
pub struct Application<G: Html> {
    root: Root<G>,
    router: Option<AppRouter>,
    components: ComponentRegistry<G>,
    stylesheets: Vec<Stylesheet>,
}

impl<G: Html> Application<G> {
    pub fn new(root: impl Fn(Scope<'_>) -> View<G> + 'static) -> Self {
        Self {
            root: Rc::new(root),
            router: None,
            components: ComponentRegistry::new(),
            stylesheets: Vec::new(),
        }
    }

    pub fn install(mut self, plugin: impl Plugin<G>) -> Self {
        plugin.install(&mut self);
        self
    }

    pub fn set_router(&mut self, router: AppRouter) {
        if let Some(previous) = self.router.replace(router) {
            tracing::warn!(?previous, "replacing previously attached router");
        }
    }

    /// Registers a component under a global `name`.
    pub fn component(mut self, name: &'static str, component: ComponentFn<G>) -> Result<Self> {
        self.components.register(name, component)?;
        Ok(self)
    }

    pub fn stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheets.push(stylesheet);
        self
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            router: self.router.clone(),
            components: self.components.names().collect(),
            stylesheets: self.stylesheets.iter().map(|s| s.name).collect(),
        }
    }

    /// Hands the application over to `host`, rendering it into the element matching `selector`.
    pub fn mount<H: Host<G>>(self, host: &H, selector: &str) -> Result<Mounted> {
        let manifest = self.manifest();
        tracing::info!(
            selector,
            router = manifest.router.is_some(),
            components = ?manifest.components,
            "mounting application"
        );

        let Self {
            root,
            router,
            components,
            stylesheets,
        } = self;

        let view: Box<dyn FnOnce(Scope<'_>) -> View<G>> = Box::new(move |cx: Scope<'_>| {
            provide_context(cx, components);
            match router {
                Some(router) => router.render(cx, root),
                None => root(cx),
            }
        });

        host.mount(MountRequest {
            selector: selector.to_owned(),
            stylesheets,
            manifest: manifest.clone(),
            view,
        })?;

        Ok(Mounted {
            selector: selector.to_owned(),
            manifest,
        })
    }
}
