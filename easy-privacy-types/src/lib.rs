mod defaults;
mod entry;

pub mod chat;
pub mod editor;
pub mod error;
pub mod industry;
pub mod intake;
pub mod policy;
pub mod wizard;

pub use defaults::{default_entries, default_rows, DefaultRow};
pub use entry::{DataEntry, EntryField};
pub use industry::IndustryKey;

/// Paths of the three wizard views, shared by the router and the href builders.
pub mod paths {
    pub const INTAKE: &str = "/";
    pub const EDITOR: &str = "/policy-generator";
    pub const RENDERER: &str = "/final-policy";
    pub const MARKDOWN_EXPORT: &str = "/api/policy.md";
}
