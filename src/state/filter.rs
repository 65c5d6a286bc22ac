// Filter state - narrows the displayed names
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameFilter {
    query: String,
}

impl NameFilter {
    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into().trim().to_string();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        fuzzy_match(name, &self.query)
    }
}

/// True when every query char appears in `text` in order, ignoring ASCII case
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut q_chars = query.chars();
    let mut q_char = match q_chars.next() {
        Some(c) => c,
        None => return true,
    };
    for t_char in text.chars() {
        if t_char.eq_ignore_ascii_case(&q_char) {
            q_char = match q_chars.next() {
                Some(c) => c,
                None => return true,
            };
        }
    }
    false
}
