/*!
 * Language name and code normalization.
 *
 * Every language input accepted by the library ends up as one of the
 * two-letter ISO 639-1 codes in `LANGUAGES`. Inputs can be:
 * - a canonical code ("ru")
 * - a canonical English name ("russian")
 * - an alias: ISO 639-2/T or 639-2/B codes ("rus", "ger"), retired
 *   two-letter codes ("iw") and common nicknames ("farsi", "castilian")
 *
 * Lookups ignore case and surrounding whitespace. The tables are built once
 * and never mutated.
 */

use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical language names and their ISO 639-1 codes
const LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("burmese", "my"),
    ("catalan", "ca"),
    ("chinese", "zh"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hebrew", "he"),
    ("hindi", "hi"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jv"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("korean", "ko"),
    ("kurdish", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("serbian", "sr"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tagalog", "tl"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("tatar", "tt"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("turkmen", "tk"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Alternate spellings, ISO 639-2 codes and nicknames mapped to canonical names
const ALIASES: &[(&str, &str)] = &[
    // ISO 639-2/T codes
    ("afr", "afrikaans"),
    ("sqi", "albanian"),
    ("amh", "amharic"),
    ("ara", "arabic"),
    ("hye", "armenian"),
    ("aze", "azerbaijani"),
    ("eus", "basque"),
    ("bel", "belarusian"),
    ("ben", "bengali"),
    ("bos", "bosnian"),
    ("bul", "bulgarian"),
    ("mya", "burmese"),
    ("cat", "catalan"),
    ("zho", "chinese"),
    ("hrv", "croatian"),
    ("ces", "czech"),
    ("dan", "danish"),
    ("nld", "dutch"),
    ("eng", "english"),
    ("epo", "esperanto"),
    ("est", "estonian"),
    ("fin", "finnish"),
    ("fra", "french"),
    ("glg", "galician"),
    ("kat", "georgian"),
    ("deu", "german"),
    ("ell", "greek"),
    ("guj", "gujarati"),
    ("hat", "haitian creole"),
    ("hau", "hausa"),
    ("heb", "hebrew"),
    ("hin", "hindi"),
    ("hun", "hungarian"),
    ("isl", "icelandic"),
    ("ibo", "igbo"),
    ("ind", "indonesian"),
    ("gle", "irish"),
    ("ita", "italian"),
    ("jpn", "japanese"),
    ("jav", "javanese"),
    ("kan", "kannada"),
    ("kaz", "kazakh"),
    ("khm", "khmer"),
    ("kor", "korean"),
    ("kur", "kurdish"),
    ("kir", "kyrgyz"),
    ("lat", "latin"),
    ("lav", "latvian"),
    ("lit", "lithuanian"),
    ("ltz", "luxembourgish"),
    ("mkd", "macedonian"),
    ("mlg", "malagasy"),
    ("msa", "malay"),
    ("mal", "malayalam"),
    ("mlt", "maltese"),
    ("mri", "maori"),
    ("mar", "marathi"),
    ("mon", "mongolian"),
    ("nep", "nepali"),
    ("nor", "norwegian"),
    ("pus", "pashto"),
    ("fas", "persian"),
    ("pol", "polish"),
    ("por", "portuguese"),
    ("pan", "punjabi"),
    ("ron", "romanian"),
    ("rus", "russian"),
    ("srp", "serbian"),
    ("sin", "sinhala"),
    ("slk", "slovak"),
    ("slv", "slovenian"),
    ("som", "somali"),
    ("spa", "spanish"),
    ("swa", "swahili"),
    ("swe", "swedish"),
    ("tgl", "tagalog"),
    ("tgk", "tajik"),
    ("tam", "tamil"),
    ("tat", "tatar"),
    ("tel", "telugu"),
    ("tha", "thai"),
    ("tur", "turkish"),
    ("tuk", "turkmen"),
    ("ukr", "ukrainian"),
    ("urd", "urdu"),
    ("uzb", "uzbek"),
    ("vie", "vietnamese"),
    ("cym", "welsh"),
    ("xho", "xhosa"),
    ("yid", "yiddish"),
    ("yor", "yoruba"),
    ("zul", "zulu"),
    // ISO 639-2/B codes that differ from 639-2/T
    ("alb", "albanian"),
    ("arm", "armenian"),
    ("baq", "basque"),
    ("bur", "burmese"),
    ("chi", "chinese"),
    ("cze", "czech"),
    ("dut", "dutch"),
    ("fre", "french"),
    ("geo", "georgian"),
    ("ger", "german"),
    ("gre", "greek"),
    ("ice", "icelandic"),
    ("mac", "macedonian"),
    ("mao", "maori"),
    ("may", "malay"),
    ("per", "persian"),
    ("rum", "romanian"),
    ("slo", "slovak"),
    ("wel", "welsh"),
    // Retired ISO 639-1 codes
    ("iw", "hebrew"),
    ("in", "indonesian"),
    ("ji", "yiddish"),
    // Nicknames and alternate spellings
    ("mandarin", "chinese"),
    ("cantonese", "chinese"),
    ("simplified chinese", "chinese"),
    ("traditional chinese", "chinese"),
    ("castilian", "spanish"),
    ("farsi", "persian"),
    ("flemish", "dutch"),
    ("filipino", "tagalog"),
    ("pilipino", "tagalog"),
    ("brazilian", "portuguese"),
    ("brazilian portuguese", "portuguese"),
    ("bokmal", "norwegian"),
    ("bokmål", "norwegian"),
    ("nynorsk", "norwegian"),
    ("moldovan", "romanian"),
    ("moldavian", "romanian"),
    ("gaelic", "irish"),
    ("irish gaelic", "irish"),
    ("haitian", "haitian creole"),
    ("kiswahili", "swahili"),
    ("kirghiz", "kyrgyz"),
    ("panjabi", "punjabi"),
    ("sinhalese", "sinhala"),
    ("slovene", "slovenian"),
    ("byelorussian", "belarusian"),
    ("letzeburgesch", "luxembourgish"),
    ("myanmar", "burmese"),
    ("american english", "english"),
    ("british english", "english"),
];

static NAME_TO_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGES.iter().copied().collect());

static CODE_TO_NAME: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGES.iter().map(|&(name, code)| (code, name)).collect());

static ALIAS_TO_NAME: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Trim and lowercase an input, rejecting blank strings
fn prepare(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalize a language name, alias or code to its two-letter code
///
/// Returns `None` for blank input or languages outside the supported set.
pub fn normalize_language(input: &str) -> Option<&'static str> {
    let key = prepare(input)?;

    if let Some((&code, _)) = CODE_TO_NAME.get_key_value(key.as_str()) {
        return Some(code);
    }

    if let Some(&code) = NAME_TO_CODE.get(key.as_str()) {
        return Some(code);
    }

    ALIAS_TO_NAME
        .get(key.as_str())
        .and_then(|name| NAME_TO_CODE.get(name).copied())
}

/// Same as `normalize_language` for inputs that may be absent
pub fn normalize_optional(input: Option<&str>) -> Option<&'static str> {
    input.and_then(normalize_language)
}

/// Resolve a code, name or alias to the canonical (lowercase) language name
pub fn canonical_name(input: &str) -> Option<&'static str> {
    let key = prepare(input)?;

    if let Some(&name) = CODE_TO_NAME.get(key.as_str()) {
        return Some(name);
    }

    if let Some((&name, _)) = NAME_TO_CODE.get_key_value(key.as_str()) {
        return Some(name);
    }

    ALIAS_TO_NAME.get(key.as_str()).copied()
}

/// Get a title-cased display name, e.g. "Haitian Creole"
pub fn display_name(input: &str) -> Option<String> {
    let name = canonical_name(input)?;
    let words: Vec<String> = name
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();

    Some(words.join(" "))
}

/// Check whether an input resolves to a supported language
pub fn is_supported(input: &str) -> bool {
    normalize_language(input).is_some()
}

/// Check if two inputs represent the same language
pub fn language_codes_match(first: &str, second: &str) -> bool {
    match (normalize_language(first), normalize_language(second)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// All canonical language names, sorted
pub fn supported_languages() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = LANGUAGES.iter().map(|&(name, _)| name).collect();
    names.sort_unstable();
    names
}

/// All canonical language codes, sorted and deduplicated
pub fn supported_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = LANGUAGES.iter().map(|&(_, code)| code).collect();
    codes.sort_unstable();
    codes.dedup();
    codes
}
