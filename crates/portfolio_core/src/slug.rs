/// Lower-cases `name` and replaces every run of whitespace with a single `-`.
///
/// Leading and trailing whitespace runs become hyphens as well; names in the
/// catalog never carry them.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}
