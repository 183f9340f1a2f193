use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id          : Id,
    pub name        : String,
    pub description : Option<String>,
}

impl Category {
    /// Trims the name, collapses inner whitespace and
    /// capitalizes every word, e.g. `"street  lights"` becomes
    /// `"Street Lights"`.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
