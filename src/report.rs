use crate::contract::Debuggable;
use crate::error::Error;
use crate::render;
use crate::types::Branding;

/// The category of error a [`Report`] belongs to, as distinct from the
/// specific case.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Kind {
    /// Friendly name, e.g. `"File Error"`.
    pub readable_name: String,
    /// Stable machine identifier, e.g. `"App.FileError"`.
    pub identifier: String,
}

impl Kind {
    pub fn new(readable_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            readable_name: readable_name.into(),
            identifier: identifier.into(),
        }
    }
}

/// An ad-hoc diagnosable value assembled at runtime.
///
/// For error types defined in code, implement [`Debuggable`] directly; a
/// `Report` is for diagnostics that come from data, e.g. a JSON error catalog.
/// Construct through [`ReportBuilder`] or [`Report::from_json`], both of which
/// reject empty required fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Report {
    pub kind: Kind,
    /// Human-readable explanation of what went wrong.
    pub reason: String,
    /// Identifier for this case within its kind.
    pub instance_identifier: String,
    #[serde(default)]
    pub possible_causes: Vec<String>,
    #[serde(default)]
    pub suggested_fixes: Vec<String>,
    #[serde(default)]
    pub documentation_links: Vec<String>,
    #[serde(default)]
    pub external_discussion_links: Vec<String>,
    #[serde(default)]
    pub related_issue_links: Vec<String>,
}

impl Report {
    pub fn builder(
        kind: Kind,
        reason: impl Into<String>,
        instance_identifier: impl Into<String>,
    ) -> ReportBuilder {
        ReportBuilder {
            report: Report {
                kind,
                reason: reason.into(),
                instance_identifier: instance_identifier.into(),
                possible_causes: Vec::new(),
                suggested_fixes: Vec::new(),
                documentation_links: Vec::new(),
                external_discussion_links: Vec::new(),
                related_issue_links: Vec::new(),
            },
        }
    }

    /// Deserialize a report from JSON and validate it against the contract.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let report: Report = serde_json::from_str(json)?;
        report.validate()?;
        tracing::debug!(identifier = %report.identifier(), "loaded diagnostic report");
        Ok(report)
    }

    /// Render with the given branding. Shorthand for [`render::render`].
    pub fn to_text(&self, branding: &Branding) -> String {
        render::render(self, branding)
    }

    fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("kind.readable_name", &self.kind.readable_name),
            ("kind.identifier", &self.kind.identifier),
            ("reason", &self.reason),
            ("instance_identifier", &self.instance_identifier),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Contract {
                    reason: format!("required field `{field}` is empty"),
                });
            }
        }
        Ok(())
    }
}

impl Debuggable for Report {
    fn reason(&self) -> String {
        self.reason.clone()
    }

    fn kind_readable_name(&self) -> String {
        self.kind.readable_name.clone()
    }

    fn kind_identifier(&self) -> String {
        self.kind.identifier.clone()
    }

    fn instance_identifier(&self) -> String {
        self.instance_identifier.clone()
    }

    fn possible_causes(&self) -> Vec<String> {
        self.possible_causes.clone()
    }

    fn suggested_fixes(&self) -> Vec<String> {
        self.suggested_fixes.clone()
    }

    fn documentation_links(&self) -> Vec<String> {
        self.documentation_links.clone()
    }

    fn external_discussion_links(&self) -> Vec<String> {
        self.external_discussion_links.clone()
    }

    fn related_issue_links(&self) -> Vec<String> {
        self.related_issue_links.clone()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.readable_name, self.reason)
    }
}

/// Builder for [`Report`]. Append methods can be chained in any order; the
/// lists keep insertion order.
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.report.possible_causes.push(cause.into());
        self
    }

    pub fn fix(mut self, fix: impl Into<String>) -> Self {
        self.report.suggested_fixes.push(fix.into());
        self
    }

    pub fn documentation_link(mut self, url: impl Into<String>) -> Self {
        self.report.documentation_links.push(url.into());
        self
    }

    pub fn discussion_link(mut self, url: impl Into<String>) -> Self {
        self.report.external_discussion_links.push(url.into());
        self
    }

    pub fn issue_link(mut self, url: impl Into<String>) -> Self {
        self.report.related_issue_links.push(url.into());
        self
    }

    /// Validate required fields and produce the report.
    pub fn build(self) -> Result<Report, Error> {
        self.report.validate()?;
        tracing::debug!(identifier = %self.report.identifier(), "built diagnostic report");
        Ok(self.report)
    }
}
