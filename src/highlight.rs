//! TSX syntax highlighting for the code pullout.
//!
//! One fixed syntax family: every snippet in the tour is TSX. Highlighting
//! is best-effort — a snippet the grammar cannot make sense of renders as
//! plain unstyled lines, never an error.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use tree_sitter_highlight::{HighlightConfiguration, HighlightEvent, Highlighter};

use crate::store::{Field, Subscription, UiStore};
use crate::theme;

const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",
    "comment",
    "constant",
    "constant.builtin",
    "constructor",
    "embedded",
    "function",
    "function.builtin",
    "keyword",
    "number",
    "operator",
    "property",
    "punctuation",
    "punctuation.bracket",
    "punctuation.delimiter",
    "punctuation.special",
    "string",
    "string.escape",
    "string.special",
    "tag",
    "type",
    "type.builtin",
    "variable",
    "variable.builtin",
    "variable.parameter",
];

const TSX_EXTRA_HIGHLIGHTS: &str = r#"
(comment) @comment

[
  (string)
  (template_string)
] @string

(regex) @string.special
(number) @number
"#;

static TSX_HIGHLIGHT_CONFIG: OnceLock<Option<HighlightConfiguration>> = OnceLock::new();

fn tsx_highlight_config() -> Option<&'static HighlightConfiguration> {
    TSX_HIGHLIGHT_CONFIG
        .get_or_init(|| {
            let language = tree_sitter_typescript::LANGUAGE_TSX.into();
            let query = format!(
                "{}\n{}\n{}\n{}",
                tree_sitter_javascript::HIGHLIGHT_QUERY,
                tree_sitter_javascript::JSX_HIGHLIGHT_QUERY,
                tree_sitter_typescript::HIGHLIGHTS_QUERY,
                TSX_EXTRA_HIGHLIGHTS
            );
            let mut config =
                HighlightConfiguration::new(language, "tsx", &query, "", "").ok()?;
            config.configure(HIGHLIGHT_NAMES);
            Some(config)
        })
        .as_ref()
}

fn style_for_capture(name: &str) -> Style {
    let base = name.split('.').next().unwrap_or(name);
    match base {
        "attribute" | "property" => theme::code_property_style(),
        "comment" => theme::code_comment_style(),
        "string" => theme::code_string_style(),
        "number" => theme::code_number_style(),
        "keyword" => theme::code_keyword_style(),
        "function" | "constructor" => theme::code_function_style(),
        "type" => theme::code_type_style(),
        "constant" => theme::code_constant_style(),
        "variable" => theme::code_variable_style(),
        "tag" => theme::code_tag_style(),
        "operator" => theme::code_operator_style(),
        "punctuation" => theme::code_punctuation_style(),
        "embedded" => theme::code_constant_style(),
        _ => Style::default(),
    }
}

fn plain_lines(code: &str) -> Vec<Line<'static>> {
    if code.is_empty() {
        vec![Line::from("")]
    } else {
        code.lines().map(|l| Line::from(l.to_string())).collect()
    }
}

fn push_segment(lines: &mut Vec<Line<'static>>, segment: &str, style: Option<Style>) {
    for (i, part) in segment.split('\n').enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        if part.is_empty() {
            continue;
        }
        let span = match style {
            Some(style) => Span::styled(part.to_string(), style),
            None => part.to_string().into(),
        };
        if let Some(last) = lines.last_mut() {
            last.spans.push(span);
        }
    }
}

/// Tokenize one snippet into styled lines. Falls back to plain lines on
/// any grammar or query failure.
pub fn highlight_lines(code: &str) -> Vec<Line<'static>> {
    let Some(config) = tsx_highlight_config() else {
        return plain_lines(code);
    };

    let mut highlighter = Highlighter::new();
    let iterator = match highlighter.highlight(config, code.as_bytes(), None, |_| None) {
        Ok(iter) => iter,
        Err(_) => return plain_lines(code),
    };

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    let mut highlight_stack = Vec::new();

    for event in iterator {
        match event {
            Ok(HighlightEvent::HighlightStart(highlight)) => highlight_stack.push(highlight),
            Ok(HighlightEvent::HighlightEnd) => {
                highlight_stack.pop();
            }
            Ok(HighlightEvent::Source { start, end }) => {
                if start == end {
                    continue;
                }
                let style = highlight_stack
                    .last()
                    .and_then(|h| HIGHLIGHT_NAMES.get(h.0).copied())
                    .map(style_for_capture);
                push_segment(&mut lines, &code[start..end], style);
            }
            Err(_) => return plain_lines(code),
        }
    }

    lines
}

/// Memoized highlight of the store's current snippet.
///
/// Subscribes to the `code` field only: a write there marks the cache
/// dirty, and the next read re-tokenizes. Writes to any other field leave
/// the cache untouched — toggling the sidebar or theme never re-tokenizes.
pub struct HighlightCache {
    inner: Rc<RefCell<CacheInner>>,
    _sub: Subscription,
}

struct CacheInner {
    code: String,
    lines: Vec<Line<'static>>,
    dirty: bool,
    generation: u64,
}

impl HighlightCache {
    pub fn new(store: &UiStore) -> Self {
        let inner = Rc::new(RefCell::new(CacheInner {
            code: store.with(|s| s.code.clone()),
            lines: Vec::new(),
            dirty: true,
            generation: 0,
        }));

        let observed = Rc::clone(&inner);
        let sub = store.subscribe(Field::Code, move |state| {
            let mut cache = observed.borrow_mut();
            cache.code = state.code.clone();
            cache.dirty = true;
        });

        Self { inner, _sub: sub }
    }

    /// The highlighted lines for the current snippet, recomputing only if
    /// the snippet changed since the last read.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut cache = self.inner.borrow_mut();
        if cache.dirty {
            let lines = highlight_lines(&cache.code);
            cache.lines = lines;
            cache.dirty = false;
            cache.generation += 1;
        }
        cache.lines.clone()
    }

    /// Bumped once per recompute. Test observability for the selective
    /// re-render contract.
    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UiState;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_source_text() {
        let code = "const x = 1";
        let lines = highlight_lines(code);
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), code);
    }

    #[test]
    fn test_highlight_preserves_line_structure() {
        let code = "const a = 1\nconst b = 'two'";
        let lines = highlight_lines(code);
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "const a = 1");
        assert_eq!(text_of(&lines[1]), "const b = 'two'");
    }

    #[test]
    fn test_malformed_input_renders_plain() {
        // Not valid TSX; the contract is best-effort tokens, never an error.
        let code = "<<<%%% not (((( code";
        let lines = highlight_lines(code);
        assert_eq!(text_of(&lines[0]), code);
    }

    #[test]
    fn test_empty_input_is_single_blank_line() {
        assert_eq!(highlight_lines("").len(), 1);
    }

    #[test]
    fn test_cache_recomputes_only_on_code_writes() {
        let store = UiStore::new(UiState::default());
        let cache = HighlightCache::new(&store);

        let _ = cache.lines();
        assert_eq!(cache.generation(), 1);

        // Unrelated fields do not invalidate.
        store.set_sidebar_open(false);
        store.set_theme(crate::theme::Theme::Light);
        let _ = cache.lines();
        assert_eq!(cache.generation(), 1);

        store.set_code("const x = 1");
        let _ = cache.lines();
        assert_eq!(cache.generation(), 2);
    }

    #[test]
    fn test_cache_reads_are_memoized() {
        let store = UiStore::new(UiState::default());
        let cache = HighlightCache::new(&store);
        let _ = cache.lines();
        let _ = cache.lines();
        assert_eq!(cache.generation(), 1);
    }
}
