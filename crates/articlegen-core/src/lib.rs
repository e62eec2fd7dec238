pub mod capability;
pub mod error;
pub mod format;
pub mod keyword;
pub mod options;

pub use capability::{Capability, PromptRequest};
pub use error::ArticleError;
pub use format::{format, FormattedOutput};
pub use keyword::Keyword;
pub use options::{GenerationOptions, OutputFormat, TemplateStyle};
