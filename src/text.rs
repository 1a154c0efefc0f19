//! Turning lists into English: `a, b and c`.

use crate::family::Family;

/// Joins `items` with `separator`, except that the last two are joined with `final_separator`.
/// An empty list gives an empty string and a single item is returned unchanged.
///
/// # Example
/// ```
/// # use colourmatch::text::join;
/// assert_eq!(join(&["Web", "X11", "Pantone"], ", ", " and "), "Web, X11 and Pantone");
/// ```
pub fn join<S: AsRef<str>>(items: &[S], separator: &str, final_separator: &str) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].as_ref().to_string(),
        n => {
            let head: Vec<&str> = items[..n - 1].iter().map(|s| s.as_ref()).collect();
            format!("{}{}{}", head.join(separator), final_separator, items[n - 1].as_ref())
        }
    }
}

/// The labels of the given families as prose: `Web, X11 and Pantone`.
pub fn family_list(families: &[Family]) -> String {
    let labels: Vec<&str> = families.iter().map(|f| f.label()).collect();
    join(&labels, ", ", " and ")
}
