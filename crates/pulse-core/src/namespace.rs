//! Backend namespace derivation.

/// Derive the ingest namespace from the configured prefix and the environment
/// name: `"{prefix}/{TitleCase(environment)}"`.
///
/// The transform is deterministic: `production` -> `Production`,
/// `staging-eu` -> `Staging-Eu`. Each alphabetic run starts uppercase and
/// continues lowercase, so dashboards keyed on the namespace never see two
/// spellings of the same environment.
pub fn namespace(prefix: &str, environment: &str) -> String {
    format!("{prefix}/{}", title_case(environment))
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
