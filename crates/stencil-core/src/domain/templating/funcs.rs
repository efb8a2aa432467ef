//! Case-transform helpers callable from substitution expressions.

/// Names accepted in a pipeline, e.g. `{{.ProjectName | kebab}}`.
pub const FUNCTIONS: [&str; 5] = ["kebab", "snake", "upper", "lower", "title"];

pub fn is_defined(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// Apply a helper by name. `None` if the name is not defined.
pub fn apply(name: &str, input: &str) -> Option<String> {
    let out = match name {
        "kebab" => kebab(input),
        "snake" => input.replace(' ', "_").to_lowercase(),
        "upper" => input.to_uppercase(),
        "lower" => input.to_lowercase(),
        "title" => title(input),
        _ => return None,
    };
    Some(out)
}

/// Spaces to hyphens, then lowercase: `My App` becomes `my-app`.
pub fn kebab(input: &str) -> String {
    input.replace(' ', "-").to_lowercase()
}

/// Uppercase the first character only.
fn title(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(input.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
