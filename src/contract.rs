use crate::render;
use crate::types::Branding;

/// Capability contract for error-like values that can explain themselves.
///
/// Implementers supply a reason, a readable kind name, and the two identifier
/// parts; everything else has a default. `kind_readable_name` and
/// `kind_identifier` describe the *category* of error and should not vary
/// between instances of the same kind.
///
/// `kind_identifier` must be supplied explicitly rather than derived from the
/// type name: `std::any::type_name` makes no stability guarantee across
/// compiler versions, which rules it out for an identifier that callers grep
/// logs for.
pub trait Debuggable {
    /// Human-readable explanation of what went wrong.
    fn reason(&self) -> String;

    /// Friendly name for the category of error, e.g. `"File Error"`.
    fn kind_readable_name(&self) -> String;

    /// Stable machine identifier for the kind, e.g. `"App.FileError"`.
    fn kind_identifier(&self) -> String;

    /// Identifier distinguishing this specific case within its kind.
    fn instance_identifier(&self) -> String;

    /// Stable identifier for this error case.
    ///
    /// Defaults to `"{kind_identifier}.{instance_identifier}"`; carries no
    /// state of its own.
    fn identifier(&self) -> String {
        format!("{}.{}", self.kind_identifier(), self.instance_identifier())
    }

    fn possible_causes(&self) -> Vec<String> {
        Vec::new()
    }

    fn suggested_fixes(&self) -> Vec<String> {
        Vec::new()
    }

    fn documentation_links(&self) -> Vec<String> {
        Vec::new()
    }

    fn external_discussion_links(&self) -> Vec<String> {
        Vec::new()
    }

    fn related_issue_links(&self) -> Vec<String> {
        Vec::new()
    }

    /// Full report with default [`Branding`]. Use [`render::render`] directly
    /// to control the branding.
    fn debug_report(&self) -> String
    where
        Self: Sized,
    {
        render::render(self, &Branding::default())
    }
}
