use serde::Serialize;

/// One action inside a [`RefactorDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefactorAction {
    pub name: String,
    pub description: String,
}

/// Catalog entry advertised to the editor when a refactor is offerable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefactorDescriptor {
    pub name: String,
    pub description: String,
    pub actions: Vec<RefactorAction>,
}

impl RefactorDescriptor {
    pub fn has_action(&self, action_name: &str) -> bool {
        self.actions.iter().any(|action| action.name == action_name)
    }
}
