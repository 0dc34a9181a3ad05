mod builder_config;
mod feed_metadata;
mod output_files;
mod route_hooks;

pub use builder_config::BuilderConfig;
pub use feed_metadata::FeedMetadata;
pub use output_files::OutputFiles;
pub use route_hooks::{ConfiguredHooks, RouteHooks};
