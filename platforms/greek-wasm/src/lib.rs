use greek_tokenizer::Tokenization;
use greek_translit::{TranslitOptions, Transliterator};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Polytonic unless `polytonic` is explicitly `false`.
#[wasm_bindgen]
pub fn tr(text: &str, polytonic: Option<bool>) -> String {
    greek_translit::tr(text, polytonic.unwrap_or(true))
}

/// Returns a JS array of token strings.
#[wasm_bindgen]
pub fn tokenize(text: &str) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&greek_tokenizer::tokenize(text))?)
}

#[wasm_bindgen(js_name = standardDiacritics)]
pub fn standard_diacritics(text: &str) -> String {
    greek_normalize::standard_diacritics(text)
}

#[wasm_bindgen(js_name = reorderDiacritics)]
pub fn reorder_diacritics(text: &str) -> String {
    greek_normalize::reorder_diacritics(text)
}

#[wasm_bindgen(js_name = pronunciationOrder)]
pub fn pronunciation_order(text: &str) -> String {
    greek_normalize::pronunciation_order(text)
}

/// One token as JavaScript sees it. Offsets are UTF-8 byte offsets into the
/// decomposed text.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenView {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub tokens: Vec<TokenView>,
    pub diagnostics: Vec<String>,
}

impl From<&Tokenization> for AnalysisReport {
    fn from(tokenization: &Tokenization) -> Self {
        Self {
            tokens: tokenization
                .tokens
                .iter()
                .map(|t| TokenView {
                    text: t.text.clone(),
                    start: t.span.start,
                    end: t.span.end,
                })
                .collect(),
            diagnostics: tokenization.diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Transliterator instance kept alive on the JS side, so its tokenizer
/// cache survives between calls.
#[wasm_bindgen]
pub struct GreekEngine {
    translit: Transliterator,
}

#[wasm_bindgen]
impl GreekEngine {
    /// `options` is `{ script: "polytonic" | "modern", cacheCapacity: number }`,
    /// every field optional. `undefined` gives the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<GreekEngine, JsValue> {
        let options: TranslitOptions = if options.is_undefined() || options.is_null() {
            TranslitOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)?
        };

        Ok(Self {
            translit: Transliterator::new(options),
        })
    }

    pub fn transliterate(&mut self, text: &str) -> String {
        self.translit.transliterate(text)
    }

    pub fn analyze(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let tokenization = self.translit.tokenizer_mut().analyze(text);
        let report = AnalysisReport::from(tokenization.as_ref());
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_defaults_to_polytonic() {
        assert_eq!(tr("λόγος", None), "lógos");
        assert_eq!(tr("αυτός", Some(false)), "aftós");
    }

    #[test]
    fn test_analysis_report() {
        let report = AnalysisReport::from(&greek_tokenizer::analyze("ρ\u{0301}α"));
        assert_eq!(
            report.tokens,
            vec![
                TokenView { text: "ρ\u{0301}".to_string(), start: 0, end: 4 },
                TokenView { text: "α".to_string(), start: 4, end: 6 },
            ]
        );
        assert_eq!(report.diagnostics.len(), 1);
    }
}
