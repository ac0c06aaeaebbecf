//! Language-service decorator that adds the wrap-function-reference refactor.
//!
//! Every operation except the two refactor hooks is forwarded unchanged to the
//! wrapped service.

use crate::config::PluginSettings;
use crate::domain::{CursorLocus, Location, QuickInfo, RefactorDescriptor, RefactorEditInfo};
use crate::error::RefactorResult;
use crate::host::{FormatOptions, LanguageService, Printer, Program, UserPreferences};
use crate::printer::CanonicalPrinter;
use crate::refactor::{self, ACTION_NAME, RefactorContext};

pub struct WrapFunctionReference<S> {
    inner: S,
    settings: PluginSettings,
    printer: CanonicalPrinter,
}

impl<S: LanguageService> WrapFunctionReference<S> {
    pub fn new(inner: S, settings: PluginSettings) -> Self {
        log::debug!(
            target: "wrapref::plugin",
            "Wrapping language service with settings {:?}",
            settings
        );
        Self {
            inner,
            printer: CanonicalPrinter::new(settings.arrow_parens),
            settings,
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn with_context<T>(
        &self,
        file_name: &str,
        f: impl FnOnce(RefactorContext<'_>) -> T,
    ) -> Option<T> {
        let program = self.inner.program()?;
        let Some(tree) = program.source_tree(file_name) else {
            log::debug!(target: "wrapref::plugin", "Unknown file {}", file_name);
            return None;
        };
        Some(f(RefactorContext::new(
            tree,
            program.type_checker(),
            &self.settings,
        )))
    }
}

impl<S: LanguageService> LanguageService for WrapFunctionReference<S> {
    fn program(&self) -> Option<&dyn Program> {
        self.inner.program()
    }

    fn get_applicable_refactors(
        &self,
        file_name: &str,
        locus: CursorLocus,
    ) -> Vec<RefactorDescriptor> {
        let mut refactors = self.inner.get_applicable_refactors(file_name, locus);
        if !self.settings.enabled {
            return refactors;
        }

        let found = self
            .with_context(file_name, |ctx| refactor::is_applicable(&ctx, locus.offset()))
            .flatten();
        if let Some(descriptor) = found
            && !refactors.iter().any(|r| r.name == descriptor.name)
        {
            refactors.push(descriptor);
        }
        refactors
    }

    fn get_edits_for_refactor(
        &self,
        file_name: &str,
        format_options: &FormatOptions,
        locus: CursorLocus,
        refactor_name: &str,
        action_name: &str,
        preferences: &UserPreferences,
    ) -> RefactorResult<Option<RefactorEditInfo>> {
        let passthrough = || {
            self.inner.get_edits_for_refactor(
                file_name,
                format_options,
                locus,
                refactor_name,
                action_name,
                preferences,
            )
        };

        if action_name != ACTION_NAME || !self.settings.enabled {
            return passthrough();
        }

        let printer: &dyn Printer = &self.printer;
        match self.with_context(file_name, |ctx| refactor::build_edit(&ctx, printer, locus.offset())) {
            Some(edit) => Ok(Some(RefactorEditInfo::from_edits(vec![edit?]))),
            None => passthrough(),
        }
    }

    fn get_quick_info_at_position(&self, file_name: &str, offset: usize) -> Option<QuickInfo> {
        self.inner.get_quick_info_at_position(file_name, offset)
    }

    fn get_definition_at_position(&self, file_name: &str, offset: usize) -> Vec<Location> {
        self.inner.get_definition_at_position(file_name, offset)
    }

    fn find_references(&self, file_name: &str, offset: usize) -> Vec<Location> {
        self.inner.find_references(file_name, offset)
    }
}
