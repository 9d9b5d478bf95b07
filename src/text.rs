use regex::Regex;

/// Shared word tokenizer.
///
/// Lexical richness and readability must agree on what counts as a word, so
/// both go through this one routine: maximal runs of word characters
/// (letters, digits, underscore).
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, String> {
        let word = Regex::new(r"\w+")
            .map_err(|err| format!("failed to compile word pattern: {}", err))?;
        Ok(Self { word })
    }

    /// Word tokens in order of appearance, borrowed from the input.
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.word.find_iter(text).map(|m| m.as_str()).collect()
    }
}
