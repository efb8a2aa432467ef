//! `.env.example` scanner.
//!
//! Each `KEY=value` line becomes an [`EnvVariable`] whose description is the
//! closest preceding comment. A blank line or a consumed assignment clears
//! the pending description. Lines without `=` are ignored.

use crate::domain::schema::EnvVariable;

pub fn parse_env_example(content: &str) -> Vec<EnvVariable> {
    let mut vars = Vec::new();
    let mut description = String::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            description.clear();
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            if !comment.is_empty() {
                description = comment.to_owned();
            }
            continue;
        }

        if let Some((name, example)) = line.split_once('=') {
            vars.push(EnvVariable {
                name: name.trim().to_owned(),
                description: std::mem::take(&mut description),
                example: example.trim().to_owned(),
            });
        }
    }

    vars
}
