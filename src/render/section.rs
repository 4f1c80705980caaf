use crate::contract::Debuggable;
use crate::types::Branding;

/// The five optional report sections, in render order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Section {
    PossibleCauses,
    SuggestedFixes,
    DocumentationLinks,
    ExternalDiscussionLinks,
    RelatedIssueLinks,
}

impl Section {
    /// All sections in their fixed render order.
    pub fn all() -> &'static [Section; 5] {
        &[
            Self::PossibleCauses,
            Self::SuggestedFixes,
            Self::DocumentationLinks,
            Self::ExternalDiscussionLinks,
            Self::RelatedIssueLinks,
        ]
    }

    /// Header line for this section. The trailing space before the bulleted
    /// list is part of the format.
    pub fn header(self, branding: &Branding) -> String {
        match self {
            Self::PossibleCauses => "Here are some possible causes: ".to_string(),
            Self::SuggestedFixes => "These suggestions could address the issue: ".to_string(),
            Self::DocumentationLinks => {
                format!("{}'s documentation talks about this: ", branding.project_name)
            }
            Self::ExternalDiscussionLinks => {
                "These external discussion links might be helpful: ".to_string()
            }
            Self::RelatedIssueLinks => {
                "See these issue-tracker links for discussion on this topic: ".to_string()
            }
        }
    }

    /// The items a value supplies for this section.
    pub fn items_of(self, value: &dyn Debuggable) -> Vec<String> {
        match self {
            Self::PossibleCauses => value.possible_causes(),
            Self::SuggestedFixes => value.suggested_fixes(),
            Self::DocumentationLinks => value.documentation_links(),
            Self::ExternalDiscussionLinks => value.external_discussion_links(),
            Self::RelatedIssueLinks => value.related_issue_links(),
        }
    }
}
