//! Common utility functions shared across the codebase.

/// Converts a component or mixin name to the kebab-case used for file names.
///
/// Every character that is not an ASCII letter becomes `-`, a `-` is inserted
/// before each uppercase letter that follows another letter, and the result
/// is lowercased.
///
/// # Examples
///
/// ```
/// use apigen::utils::kebab_case;
///
/// assert_eq!(kebab_case("VBtn"), "v-btn");
/// assert_eq!(kebab_case("VTextField"), "v-text-field");
/// assert_eq!(kebab_case("base-comp"), "base-comp");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_is_letter = false;

    for c in name.chars() {
        if c.is_ascii_alphabetic() {
            if c.is_ascii_uppercase() && prev_is_letter {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_is_letter = true;
        } else {
            out.push('-');
            prev_is_letter = false;
        }
    }

    out
}
