/// Turns a lower camel case method name into the upper snake case stem used
/// for its macros, e.g. `doSomethingNative` becomes `DO_SOMETHING_NATIVE`.
///
/// Names that are already upper case are returned untouched, so applying
/// this twice gives the same result as applying it once.
pub fn macro_stem(name: &str) -> String {
    if name.to_uppercase() == name {
        return name.to_owned();
    }

    let mut stem = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        let boundary = prev.is_some_and(|p| p.is_lowercase() || p.is_numeric());
        if c.is_uppercase() && boundary {
            stem.push('_');
        }
        stem.push(c);
        prev = Some(c);
    }
    stem.to_uppercase()
}
