use sycamore::prelude::*;

use crate::{application::Manifest, styles::Stylesheet, Result};

/// Everything a host needs to mount an application.
pub struct MountRequest<G: Html> {
    pub selector: String,
    pub stylesheets: Vec<Stylesheet>,
    pub manifest: Manifest,
    pub view: Box<dyn FnOnce(Scope<'_>) -> View<G>>,
}

/// The document an application is mounted into.
///
/// A host resolves the target element first and fails with
/// [`Error::MountTargetMissing`](crate::Error::MountTargetMissing) without side effects if it does not exist.
/// Otherwise stylesheets are applied in order before the view is rendered into the target.
pub trait Host<G: Html> {
    fn mount(&self, request: MountRequest<G>) -> Result<()>;
}

#[cfg(feature = "browser")]
pub use self::browser::BrowserHost;
#[cfg(any(test, feature = "ssr"))]
pub use self::ssr::StaticHost;

/// Appends every item or none: on the first failure the already appended items are removed again.
#[cfg(any(test, feature = "browser"))]
fn append_all<T>(
    items: &[T],
    mut append: impl FnMut(&T) -> Result<()>,
    mut remove: impl FnMut(&T),
) -> Result<()> {
    for (i, item) in items.iter().enumerate() {
        if let Err(err) = append(item) {
            items[..i].iter().rev().for_each(&mut remove);
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::append_all;
    use crate::Error;

    #[test]
    fn append_all_or_nothing() {
        let head = RefCell::new(Vec::new());
        let append = |name: &&'static str| {
            if *name == "broken" {
                return Err(Error::Dom("append failed".to_owned()));
            }
            head.borrow_mut().push(*name);
            Ok(())
        };
        let remove = |name: &&str| head.borrow_mut().retain(|n| n != name);

        let err = append_all(&["date-picker", "reset", "broken", "theme"], append, remove);
        assert!(matches!(err, Err(Error::Dom(_))));
        assert!(head.borrow().is_empty());

        append_all(&["reset", "theme"], append, remove).unwrap();
        assert_eq!(*head.borrow(), vec!["reset", "theme"]);
    }
}

#[cfg(feature = "browser")]
mod browser {
    use sycamore::web::DomNode;

    use super::{Host, MountRequest};
    use crate::{styles::Stylesheet, Error, Result};

    /// Mounts into the live browser document.
    pub struct BrowserHost {
        document: web_sys::Document,
    }

    impl BrowserHost {
        pub fn new() -> Result<Self> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or(Error::NoDocument)?;
            Ok(Self { document })
        }

        fn style_element(&self, stylesheet: &Stylesheet) -> Result<web_sys::Element> {
            let style = self
                .document
                .create_element("style")
                .map_err(|err| Error::Dom(format!("{err:?}")))?;
            style
                .set_attribute("data-stylesheet", stylesheet.name)
                .map_err(|err| Error::Dom(format!("{err:?}")))?;
            style.set_text_content(Some(stylesheet.source));
            Ok(style)
        }
    }

    impl Host<DomNode> for BrowserHost {
        fn mount(&self, request: MountRequest<DomNode>) -> Result<()> {
            let target = self
                .document
                .query_selector(&request.selector)
                .map_err(|_| Error::InvalidSelector(request.selector.clone()))?
                .ok_or_else(|| Error::MountTargetMissing(request.selector.clone()))?;

            let head = self.document.head().ok_or(Error::NoDocument)?;
            let styles = request
                .stylesheets
                .iter()
                .map(|stylesheet| self.style_element(stylesheet))
                .collect::<Result<Vec<_>>>()?;

            super::append_all(
                &styles,
                |style| {
                    head.append_child(style)
                        .map(drop)
                        .map_err(|err| Error::Dom(format!("{err:?}")))
                },
                |style| {
                    let _ = head.remove_child(style);
                },
            )?;

            sycamore::render_to(request.view, &target);
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "ssr"))]
mod ssr {
    use std::cell::RefCell;

    use sycamore::web::SsrNode;

    use super::{Host, MountRequest};
    use crate::{css::Cascade, styles::Stylesheet, Error, Result};

    /// An in-memory document, rendered with the server side renderer.
    ///
    /// Only `#id` selectors are supported.
    #[derive(Default)]
    pub struct StaticHost {
        document: RefCell<Document>,
    }

    #[derive(Default)]
    struct Document {
        stylesheets: Vec<Stylesheet>,
        elements: Vec<Element>,
        mounts: usize,
    }

    struct Element {
        id: String,
        inner_html: String,
    }

    impl StaticHost {
        /// A document without any elements.
        pub fn empty() -> Self {
            Self::default()
        }

        pub fn with_element(id: impl Into<String>) -> Self {
            let host = Self::empty();
            host.document.borrow_mut().elements.push(Element {
                id: id.into(),
                inner_html: String::new(),
            });
            host
        }

        pub fn inner_html(&self, id: &str) -> Option<String> {
            self.document
                .borrow()
                .elements
                .iter()
                .find(|element| element.id == id)
                .map(|element| element.inner_html.clone())
        }

        /// Names of the applied stylesheets in the order they were applied.
        pub fn stylesheets(&self) -> Vec<&'static str> {
            self.document
                .borrow()
                .stylesheets
                .iter()
                .map(|stylesheet| stylesheet.name)
                .collect()
        }

        /// Value of `property` for `selector` after all applied stylesheets.
        pub fn computed_style(&self, selector: &str, property: &str) -> Option<String> {
            let document = self.document.borrow();
            Cascade::new(&document.stylesheets)
                .value(selector, property)
                .map(ToOwned::to_owned)
        }

        pub fn mount_count(&self) -> usize {
            self.document.borrow().mounts
        }

        /// Serializes the whole document.
        pub fn render_document(&self) -> String {
            let document = self.document.borrow();

            let mut html = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
            for stylesheet in &document.stylesheets {
                html.push_str(&format!(
                    "<style data-stylesheet=\"{}\">{}</style>",
                    stylesheet.name, stylesheet.source
                ));
            }
            html.push_str("</head><body>");
            for element in &document.elements {
                html.push_str(&format!(
                    "<div id=\"{}\">{}</div>",
                    element.id, element.inner_html
                ));
            }
            html.push_str("</body></html>");
            html
        }
    }

    impl Host<SsrNode> for StaticHost {
        fn mount(&self, request: MountRequest<SsrNode>) -> Result<()> {
            let id = request
                .selector
                .strip_prefix('#')
                .filter(|id| !id.is_empty())
                .ok_or_else(|| Error::InvalidSelector(request.selector.clone()))?;

            let mut document = self.document.borrow_mut();
            let index = document
                .elements
                .iter()
                .position(|element| element.id == id)
                .ok_or_else(|| Error::MountTargetMissing(request.selector.clone()))?;

            document.stylesheets.extend(request.stylesheets);
            document.elements[index].inner_html = sycamore::render_to_string(request.view);
            document.mounts += 1;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use sycamore::prelude::Scope;

        use super::*;
        use crate::styles;

        fn request(selector: &str) -> MountRequest<SsrNode> {
            MountRequest {
                selector: selector.to_owned(),
                stylesheets: vec![styles::RESET, styles::THEME],
                manifest: Default::default(),
                view: Box::new(|cx: Scope<'_>| sycamore::view! { cx, p { "hello" } }),
            }
        }

        #[test]
        fn mount_into_element() {
            let host = StaticHost::with_element("app");
            host.mount(request("#app")).unwrap();

            assert!(host.inner_html("app").unwrap().contains("hello"));
            assert_eq!(host.stylesheets(), vec!["reset", "theme"]);
            assert_eq!(host.mount_count(), 1);

            let document = host.render_document();
            assert!(document.contains("<style data-stylesheet=\"reset\">"));
            assert!(document.contains("<div id=\"app\">"));
            assert!(document.ends_with("</div></body></html>"));
        }

        #[test]
        fn missing_target_has_no_side_effects() {
            let host = StaticHost::with_element("root");

            let err = host.mount(request("#app")).unwrap_err();
            assert!(matches!(err, Error::MountTargetMissing(selector) if selector == "#app"));
            assert!(host.stylesheets().is_empty());
            assert_eq!(host.inner_html("root").unwrap(), "");
            assert_eq!(host.mount_count(), 0);
        }

        #[test]
        fn unsupported_selector() {
            let host = StaticHost::with_element("app");
            assert!(matches!(
                host.mount(request(".app")),
                Err(Error::InvalidSelector(_))
            ));
            assert!(matches!(host.mount(request("#")), Err(Error::InvalidSelector(_))));
        }

        #[test]
        fn computed_style() {
            let host = StaticHost::with_element("app");
            host.mount(request("#app")).unwrap();

            assert_eq!(host.computed_style("html", "line-height").as_deref(), Some("1.5"));
            assert_eq!(host.computed_style("body", "margin").as_deref(), Some("0"));
        }
    }
}
