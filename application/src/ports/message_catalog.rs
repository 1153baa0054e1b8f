//! Message catalog port.
//!
//! Templates use printf-style placeholders: `%s` takes the next argument,
//! `%s1`, `%s2`, ... take the argument at that (1-based) position.

/// Port for translating user-facing message templates.
pub trait MessageCatalog: Send + Sync {
    /// Translate `template` and substitute `args` into it.
    fn translate(&self, template: &str, args: &[&str]) -> String;
}

/// Substitutes arguments without translating. Used when no catalog is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCatalog;

impl MessageCatalog for IdentityCatalog {
    fn translate(&self, template: &str, args: &[&str]) -> String {
        substitute(template, args)
    }
}

/// Fill `%s` / `%sN` placeholders in `template`.
///
/// Placeholders without a matching argument are left as written.
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_positional = 0;
    let mut rest = template;

    while let Some(idx) = rest.find("%s") {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 2..];
        let digits = after.chars().take_while(|c| c.is_ascii_digit()).count();

        let (arg, consumed) = if digits > 0 {
            let index: usize = after[..digits].parse().unwrap_or(0);
            (index.checked_sub(1).and_then(|i| args.get(i)), digits)
        } else {
            let arg = args.get(next_positional);
            next_positional += 1;
            (arg, 0)
        };

        match arg {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[idx..idx + 2 + consumed]),
        }
        rest = &after[consumed..];
    }

    out.push_str(rest);
    out
}
