pub mod code_action;
pub mod location;
pub mod position;
pub mod workspace_edit;

pub use code_action::{RefactorAction, RefactorDescriptor};
pub use location::{Location, QuickInfo};
pub use position::{CursorLocus, TextSpan};
pub use workspace_edit::{RefactorEditInfo, ReplacementEdit};
