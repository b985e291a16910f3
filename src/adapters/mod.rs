// Adapters layer: concrete implementations of the domain ports (http catalog,
// key-value storage, notification sinks).

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpCatalog;
pub use notify::{CollectingNotifier, ConsoleNotifier, TracingNotifier};
pub use storage::{FileStore, MemoryStore};
