mod background;
mod context_probe;
mod format;
mod persona;
mod rewrite;
mod task;

pub use background::BackgroundFragment;
pub use context_probe::ContextProbeFragment;
pub use format::StreamFormatFragment;
pub use persona::StyleFragment;
pub use rewrite::RewriteFragment;
pub use task::TaskFragment;
