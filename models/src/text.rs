/// Lowercases, trims and strips the Hungarian accents from `text` so type,
/// tier and reward keywords compare equal regardless of how they were typed.
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ö' | 'ő' | 'Ó' | 'Ö' | 'Ő' => 'o',
            'ú' | 'ü' | 'ű' | 'Ú' | 'Ü' | 'Ű' => 'u',
            c => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Splits a comma separated name list, dropping empty entries.
pub fn split_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
