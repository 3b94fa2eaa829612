//! Output formats.
//!
//! Every format is a header template plus a body renderer. The set is
//! closed: [`Format`] names each variant and [`Format::spec`] resolves it
//! through a static table.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::classify::{Classification, capitalize};
use crate::error::CoreError;

/// A header template and body renderer pair.
#[derive(Debug)]
pub struct FormatSpec {
    /// Name used on the command line and in configuration.
    pub name: &'static str,

    /// Header template with `@RELEASE`, `@DATE` and `@NAME` placeholders.
    pub header: &'static str,

    /// Renders the categorized commits.
    pub render: fn(&Classification) -> String,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Markdown release notes.
    #[default]
    Markdown,

    /// Chat markup (Slack style emphasis and bullets).
    Chat,
}

static FORMATS: [FormatSpec; 2] = [
    FormatSpec {
        name: "markdown",
        header: "# **@RELEASE** - @DATE @NAME\n\n",
        render: render_markdown,
    },
    FormatSpec {
        name: "chat",
        header: "*@RELEASE* - @DATE @NAME\n\n",
        render: render_chat,
    },
];

impl Format {
    /// All formats, in table order.
    pub const ALL: [Self; 2] = [Self::Markdown, Self::Chat];

    /// Returns the format's header template and renderer.
    #[must_use]
    pub fn spec(self) -> &'static FormatSpec {
        match self {
            Self::Markdown => &FORMATS[0],
            Self::Chat => &FORMATS[1],
        }
    }

    /// Returns the format name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Returns the header template.
    #[must_use]
    pub fn header(self) -> &'static str {
        self.spec().header
    }

    /// Renders the categorized commits.
    #[must_use]
    pub fn render(self, classification: &Classification) -> String {
        (self.spec().render)(classification)
    }
}

impl FromStr for Format {
    type Err = CoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = name.trim().to_lowercase();
        // `slack` was the chat format's original name
        let wanted = if wanted == "slack" { "chat" } else { wanted.as_str() };

        Self::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| CoreError::UnknownFormat(name.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn render_markdown(classification: &Classification) -> String {
    render_sections(classification, ("### **", "**"), '*')
}

fn render_chat(classification: &Classification) -> String {
    render_sections(classification, ("_", "_"), '•')
}

fn render_sections(
    classification: &Classification,
    (open, close): (&str, &str),
    bullet: char,
) -> String {
    let mut output = String::new();

    for (category, commits) in classification.sections() {
        _ = writeln!(output, "{open}{}{close}", capitalize(category));
        for commit in commits {
            _ = writeln!(output, "  {bullet} {commit}");
        }
        output.push_str("\n\n");
    }

    output
}
