//! Release header rendering.

use chrono::{Local, NaiveDate};

/// Replaced by the release version.
pub const RELEASE_PLACEHOLDER: &str = "@RELEASE";

/// Replaced by the release codename, or nothing.
pub const NAME_PLACEHOLDER: &str = "@NAME";

/// Replaced by the release date.
pub const DATE_PLACEHOLDER: &str = "@DATE";

/// Fills a header template.
///
/// The template is scanned once, left to right. The first occurrence of each
/// placeholder is replaced and substituted text is never scanned again, so a
/// release or codename that happens to contain a placeholder is left as is.
#[must_use]
pub fn render_header(
    template: &str,
    release: &str,
    release_name: Option<&str>,
    date: &str,
) -> String {
    let name = release_name
        .map(|name| format!("(codename `{name}`)"))
        .unwrap_or_default();

    let mut pending = vec![
        (RELEASE_PLACEHOLDER, release),
        (NAME_PLACEHOLDER, name.as_str()),
        (DATE_PLACEHOLDER, date),
    ];

    let mut output = String::with_capacity(template.len() + release.len() + name.len());
    let mut rest = template;

    loop {
        let next = pending
            .iter()
            .enumerate()
            .filter_map(|(index, (token, _))| rest.find(*token).map(|pos| (pos, index)))
            .min();
        let Some((pos, index)) = next else {
            break;
        };

        let (token, value) = pending.swap_remove(index);
        output.push_str(&rest[..pos]);
        output.push_str(value);
        rest = &rest[pos + token.len()..];
    }

    output.push_str(rest);
    output
}

/// Formats a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Returns the current local date as `DD/MM/YYYY`.
#[must_use]
pub fn today() -> String {
    format_date(Local::now().date_naive())
}
