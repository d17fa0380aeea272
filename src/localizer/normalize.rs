// SPDX-License-Identifier: MPL-2.0
//! Case and accent folding used for fuzzy key matching.

/// Lower-cases `input` and maps a fixed set of Latin accented vowels to
/// their unaccented ASCII representative.
///
/// The substitution list is a fixed character table rather than a
/// locale-aware collation, so the result is identical on every
/// platform. Characters outside the table (including accented
/// consonants such as `ñ` or `ç`) pass through unchanged.
pub fn lowercase_no_accents(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ð' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
