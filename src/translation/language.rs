//! DeepL target language validation and listing.

use anyhow::Result;

use crate::ui::Style;

/// Default target locale for translated articles.
pub const DEFAULT_TARGET_LANG: &str = "EN-US";

/// Target language codes accepted by DeepL and their names.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH-HANS", "Chinese (Simplified)"),
    ("ZH-HANT", "Chinese (Traditional)"),
];

/// Prints all supported target language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target language codes (DeepL)"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a target language code and returns its canonical form.
///
/// Codes are matched case-insensitively; the canonical uppercase code is
/// returned.
///
/// # Errors
///
/// Returns an error if the code is not a DeepL target language.
pub fn validate_target(lang: &str) -> Result<String> {
    TARGET_LANGUAGES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(lang))
        .map(|(code, _)| (*code).to_string())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid target language code: '{lang}'\n\n\
                 Valid codes are DeepL target languages: EN-US, EN-GB, JA, DE, FR, ...\n\
                 Run 'artl languages' to see all supported codes."
            )
        })
}
