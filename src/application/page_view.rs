// Trait for navigable server-rendered pages

use crate::domain::element::VerticalLayout;
use crate::domain::page::PageDescriptor;

/// A unit of UI composition the router can navigate to.
///
/// `descriptor` is the declarative metadata (route, title, assets) the host
/// consumes at registration time; `body` builds a fresh element tree per
/// render. Both are infallible: views take no input and perform no I/O.
pub trait PageView: Send + Sync {
    fn descriptor(&self) -> PageDescriptor;

    fn body(&self) -> VerticalLayout;
}
