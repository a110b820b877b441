//! Small pure text helpers.

/// Turn a detail key into a display label.
///
/// Splits on camelCase boundaries, `_` and `-`, then capitalizes each word:
/// `apostila` -> `Apostila`, `terminoPrevisto` -> `Termino Previsto`.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::humanize_key;

    #[test]
    fn single_word_is_capitalized() {
        assert_eq!(humanize_key("apostila"), "Apostila");
        assert_eq!(humanize_key("recursos"), "Recursos");
    }

    #[test]
    fn camel_case_splits_into_words() {
        assert_eq!(humanize_key("terminoPrevisto"), "Termino Previsto");
        assert_eq!(humanize_key("dataDeInicio"), "Data De Inicio");
    }

    #[test]
    fn separators_split_words() {
        assert_eq!(humanize_key("carga_horaria"), "Carga Horaria");
        assert_eq!(humanize_key("carga-horaria"), "Carga Horaria");
        assert_eq!(humanize_key("__edge__"), "Edge");
    }

    #[test]
    fn non_ascii_letters_survive() {
        assert_eq!(humanize_key("aplicação"), "Aplicação");
        assert_eq!(humanize_key("índice"), "Índice");
    }

    #[test]
    fn empty_key_yields_empty_label() {
        assert_eq!(humanize_key(""), "");
    }
}
