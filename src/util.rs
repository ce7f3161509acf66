// Console logging helpers. Outside the browser (unit tests) they are silent.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// "n/total found!" label used by the counters.
pub fn format_progress(found: usize, total: usize) -> String {
    format!("{}/{} found!", found, total)
}

/// Lower-case and trim user input before matching.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whole-word check; `word` must already be lower-case.
pub fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|w| w == word)
}

pub fn first_word(text: &str) -> &str {
    text.split(|c: char| !c.is_alphanumeric())
        .find(|w| !w.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_matching_ignores_substrings() {
        assert!(has_word("oh hi there", "hi"));
        assert!(!has_word("this is it", "hi"));
        assert!(has_word("hey!", "hey"));
    }

    #[test]
    fn first_word_skips_punctuation() {
        assert_eq!(first_word("  ...yes, please"), "yes");
        assert_eq!(first_word("!!!"), "");
    }

    #[test]
    fn progress_label() {
        assert_eq!(format_progress(2, 5), "2/5 found!");
    }
}
