pub mod settings;

pub use settings::{AppConfig, KeyValueOrder, NavigationSettings, ParserSettings, PerPageMode, SerializerSettings};
