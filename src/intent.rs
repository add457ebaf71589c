//! Classifies free-form chat text into news, buy-signal or plain chat intent.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum Intent {
    News,
    Buy {
        #[serde(skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
    },
    Chat,
}

/// Keyword sets driving classification.
#[derive(Debug, Clone)]
pub struct IntentRules {
    pub news_keywords: Vec<String>,
    pub buy_keywords: Vec<String>,
}

impl Default for IntentRules {
    fn default() -> Self {
        Self {
            news_keywords: ["行情", "板块", "新闻", "资讯", "热点", "走势"]
                .into_iter()
                .map(String::from)
                .collect(),
            buy_keywords: ["买入", "能不能买", "是否买", "值得买", "进场"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    rules: IntentRules,
}

impl IntentClassifier {
    pub fn new(rules: IntentRules) -> Self {
        Self { rules }
    }

    /// News keywords win over buy keywords; a bare stock code alone implies buy.
    pub fn classify(&self, text: &str) -> Intent {
        if contains_any(text, &self.rules.news_keywords) {
            return Intent::News;
        }

        let symbol = extract_symbol(text);
        if symbol.is_some() || contains_any(text, &self.rules.buy_keywords) {
            return Intent::Buy { symbol };
        }

        Intent::Chat
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| !k.is_empty() && text.contains(k.as_str()))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// First standalone six-digit code, keeping an `.SS`/`.SZ` suffix (uppercased) if present.
pub fn extract_symbol(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() || (i > 0 && is_word_byte(bytes[i - 1])) {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i - start != 6 {
            continue;
        }

        let code = &text[start..i];
        if let Some(suffix) = bytes.get(i..i + 3) {
            let boundary = bytes.get(i + 3).map_or(true, |b| !is_word_byte(*b));
            let upper = suffix.to_ascii_uppercase();
            if boundary && (upper == b".SS" || upper == b".SZ") {
                return Some(format!("{}{}", code, String::from_utf8_lossy(&upper)));
            }
        }
        if bytes.get(i).map_or(true, |b| !is_word_byte(*b)) {
            return Some(code.to_string());
        }
    }

    None
}
