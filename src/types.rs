/// Caller-supplied labels branded into the rendered report.
///
/// The documentation-section header names the project the documentation
/// belongs to. Callers embedding the renderer set their own name here;
/// everything else in the report format is fixed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Branding {
    /// Project name used in the documentation-section header.
    #[serde(default = "default_project_name")]
    pub project_name: String,
}

impl Branding {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
        }
    }
}

fn default_project_name() -> String {
    "This project".to_string()
}
