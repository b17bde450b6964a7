use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercase, decompose (NFD) and drop combining marks, so that `"García"` compares equal to
/// `"garcia"`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
