use std::collections::BTreeMap;

use itertools::Itertools;
use sycamore::{prelude::*, reactive::try_use_context};

use crate::{Error, Result};

/// Definition of a globally registered component.
pub type ComponentFn<G> = fn(Scope<'_>, ComponentProps) -> View<G>;

/// Properties passed to a component resolved by name.
///
/// Attributes are plain strings, the optional `model` is a two-way binding owned by the caller.
#[derive(Clone, Default)]
pub struct ComponentProps {
    attrs: Vec<(&'static str, String)>,
    model: Option<RcSignal<String>>,
}

impl ComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn model(mut self, model: RcSignal<String>) -> Self {
        self.model = Some(model);
        self
    }

    /// Last value set for attribute `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn take_model(&mut self) -> Option<RcSignal<String>> {
        self.model.take()
    }
}

/// Name to component mapping, visible to the entire application tree once mounted.
///
/// The registry is only writable while the application is being configured,
/// after mount it is provided as read-only context.
pub struct ComponentRegistry<G: Html> {
    entries: BTreeMap<String, (&'static str, ComponentFn<G>)>,
}

impl<G: Html> ComponentRegistry<G> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn register(&mut self, name: &'static str, component: ComponentFn<G>) -> Result<()> {
        if !is_valid_name(name) {
            return Err(Error::InvalidComponentName(name));
        }

        let key = normalize(name);
        if let Some((existing, _)) = self.entries.get(&key) {
            return Err(Error::DuplicateComponent(*existing));
        }

        tracing::debug!(name, "registered component");
        self.entries.insert(key, (name, component));
        Ok(())
    }

    /// Looks up a component by its registered name or its kebab-case spelling.
    pub fn get(&self, name: &str) -> Option<ComponentFn<G>> {
        self.entries.get(&normalize(name)).map(|(_, c)| *c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names in the spelling they were registered with.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|(name, _)| *name)
    }
}

impl<G: Html> Default for ComponentRegistry<G> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the globally registered component `name`.
///
/// Unknown components render an empty marker element and log a warning.
pub fn resolve<G: Html>(cx: Scope, name: &str, props: ComponentProps) -> View<G> {
    let component = try_use_context::<ComponentRegistry<G>>(cx).and_then(|r| r.get(name));

    match component {
        Some(component) => component(cx, props),
        None => {
            tracing::warn!(name, "failed to resolve component");
            let name = name.to_owned();
            view! { cx, span(data-unknown-component=name) }
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Maps `VueDatePicker`, `vueDatePicker` and `vue-date-picker` to the same key.
///
/// Only `-` separates words, `vue_date_picker` stays a distinct name.
fn normalize(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .join("")
}
