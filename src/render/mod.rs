pub mod section;

pub use section::Section;

use crate::contract::Debuggable;
use crate::types::Branding;

/// Render a [`Debuggable`] value into its full multi-line report.
///
/// Sections are joined by a blank line, in fixed order: the reason line, the
/// identifier line, then one bulleted section per non-empty optional list.
/// Empty sections are omitted entirely and never shift the order of the rest.
/// Pure function of the value's fields.
pub fn render(value: &dyn Debuggable, branding: &Branding) -> String {
    let mut sections = vec![
        format!("{}: {}", value.kind_readable_name(), value.reason()),
        format!("Identifier: {}", value.identifier()),
    ];

    for section in Section::all() {
        let items = section.items_of(value);
        if items.is_empty() {
            continue;
        }
        sections.push(format!("{}{}", section.header(branding), bullet_list(&items)));
    }

    sections.join("\n\n")
}

/// Render items as a bulleted list: each on its own line, preceded by a
/// newline and `"- "`, with no trailing separator.
pub fn bullet_list(items: &[String]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str("\n- ");
        out.push_str(item);
    }
    out
}
