pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod plugin;
pub mod printer;
pub mod refactor;
pub mod syntax;
pub mod text;
pub mod typescript;

pub use config::{ArrowParens, PluginSettings, SettingsFile};
pub use domain::{
    CursorLocus, Location, QuickInfo, RefactorAction, RefactorDescriptor, RefactorEditInfo,
    ReplacementEdit, TextSpan,
};
pub use error::{HostError, HostResult, RefactorError, RefactorResult};
pub use host::{FormatOptions, LanguageService, Printer, Program, TypeChecker, UserPreferences};
pub use plugin::WrapFunctionReference;
pub use printer::CanonicalPrinter;
pub use typescript::{TypeScriptProgram, TypeScriptService};
