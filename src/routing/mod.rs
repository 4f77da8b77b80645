//! Decides, for any request path, whether it is served by a custom page, an
//! entity-backed page, a static page component, a blog post, or nothing.

pub use cache::*;
pub use classifier::*;
pub use clock::*;
pub use navigation::*;
pub use probe::*;
pub use registry::*;
pub use resolver::*;
pub use retry::*;
pub use slug::*;
pub use store::*;

mod cache;
mod classifier;
mod clock;
mod navigation;
mod probe;
mod registry;
mod resolver;
mod retry;
mod slug;
mod store;
