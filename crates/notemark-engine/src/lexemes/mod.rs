//! Word tables for the code tokenizer.
//!
//! A [`LexemeSet`] holds the five word categories of one language, each
//! partitioned by first character so the scanner only compares a handful of
//! candidates per word start. Within a partition the longest words come first,
//! so `static_cast` is tried before `static`.
//!
//! The tables are static data. [`BuiltinLexemes`] indexes them once per
//! process and resolves fence tags (`rust`, `py`, `c++`, ...) to a
//! [`Language`].

mod data;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::format::FormatKey;
use crate::state::Language;

use data::*;

/// Word categories in scanning priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Type,
    Keyword,
    Literal,
    BuiltIn,
    /// Preprocessor directives, macros and similar.
    Other,
}

impl Category {
    pub const PRIORITY: [Category; 5] = [
        Category::Type,
        Category::Keyword,
        Category::Literal,
        Category::BuiltIn,
        Category::Other,
    ];

    pub fn format(self) -> FormatKey {
        match self {
            Category::Type => FormatKey::CodeType,
            Category::Keyword => FormatKey::CodeKeyword,
            Category::Literal => FormatKey::CodeNumLiteral,
            Category::BuiltIn => FormatKey::CodeBuiltIn,
            Category::Other => FormatKey::CodeOther,
        }
    }
}

/// One category's words keyed by first character.
#[derive(Debug, Default, Clone)]
pub struct WordBucket {
    by_first: HashMap<char, Vec<&'static str>>,
}

impl WordBucket {
    pub fn from_words(words: &[&'static str]) -> Self {
        let mut by_first: HashMap<char, Vec<&'static str>> = HashMap::new();
        for word in words {
            if let Some(first) = word.chars().next() {
                by_first.entry(first).or_default().push(word);
            }
        }
        for candidates in by_first.values_mut() {
            candidates.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        }
        Self { by_first }
    }

    /// Words starting with `first`, longest first.
    pub fn candidates(&self, first: char) -> &[&'static str] {
        self.by_first.get(&first).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .next()
            .is_some_and(|first| self.candidates(first).iter().any(|c| *c == word))
    }

    pub fn is_empty(&self) -> bool {
        self.by_first.is_empty()
    }
}

/// The classified vocabulary of one language.
#[derive(Debug, Default, Clone)]
pub struct LexemeSet {
    pub types: WordBucket,
    pub keywords: WordBucket,
    pub literals: WordBucket,
    pub builtins: WordBucket,
    pub other: WordBucket,
    /// Single character starting a line comment, besides `//`.
    pub line_comment: Option<char>,
}

impl LexemeSet {
    pub fn new(tables: [&[&'static str]; 5], line_comment: Option<char>) -> Self {
        let [types, keywords, literals, builtins, other] = tables;
        Self {
            types: WordBucket::from_words(types),
            keywords: WordBucket::from_words(keywords),
            literals: WordBucket::from_words(literals),
            builtins: WordBucket::from_words(builtins),
            other: WordBucket::from_words(other),
            line_comment,
        }
    }

    pub fn bucket(&self, category: Category) -> &WordBucket {
        match category {
            Category::Type => &self.types,
            Category::Keyword => &self.keywords,
            Category::Literal => &self.literals,
            Category::BuiltIn => &self.builtins,
            Category::Other => &self.other,
        }
    }

    /// The first category, in priority order, that contains `word`.
    pub fn classify(&self, word: &str) -> Option<Category> {
        Category::PRIORITY
            .into_iter()
            .find(|category| self.bucket(*category).contains(word))
    }
}

/// Source of language vocabularies and fence tag resolution.
pub trait LexemeProvider {
    /// Resolves the text after a fence marker. Matching is case-sensitive.
    fn language_for_tag(&self, tag: &str) -> Option<Language>;

    fn lexemes(&self, language: Language) -> &LexemeSet;
}

impl<T: LexemeProvider + ?Sized> LexemeProvider for &T {
    fn language_for_tag(&self, tag: &str) -> Option<Language> {
        (**self).language_for_tag(tag)
    }

    fn lexemes(&self, language: Language) -> &LexemeSet {
        (**self).lexemes(language)
    }
}

const TAGS: &[(&str, Language)] = &[
    ("bash", Language::Bash),
    ("sh", Language::Bash),
    ("c", Language::C),
    ("cpp", Language::Cpp),
    ("cxx", Language::Cpp),
    ("c++", Language::Cpp),
    ("c#", Language::CSharp),
    ("csharp", Language::CSharp),
    ("css", Language::Css),
    ("go", Language::Go),
    ("html", Language::Xml),
    ("xml", Language::Xml),
    ("java", Language::Java),
    ("javascript", Language::Js),
    ("js", Language::Js),
    ("json", Language::Json),
    ("php", Language::Php),
    ("py", Language::Python),
    ("python", Language::Python),
    ("qml", Language::Qml),
    ("rust", Language::Rust),
    ("sql", Language::Sql),
    ("SQL", Language::Sql),
    ("ts", Language::TypeScript),
    ("typescript", Language::TypeScript),
    ("v", Language::V),
];

fn tables(language: Language) -> [&'static [&'static str]; 5] {
    match language {
        Language::Cpp | Language::C => {
            [CPP_TYPES, CPP_KEYWORDS, CPP_LITERALS, CPP_BUILTIN, CPP_OTHER]
        }
        Language::Bash => [
            SHELL_TYPES,
            SHELL_KEYWORDS,
            SHELL_LITERALS,
            SHELL_BUILTIN,
            SHELL_OTHER,
        ],
        Language::Js => [JS_TYPES, JS_KEYWORDS, JS_LITERALS, JS_BUILTIN, JS_OTHER],
        Language::TypeScript => [
            TYPESCRIPT_TYPES,
            TYPESCRIPT_KEYWORDS,
            TYPESCRIPT_LITERALS,
            TYPESCRIPT_BUILTIN,
            TYPESCRIPT_OTHER,
        ],
        Language::Php => [PHP_TYPES, PHP_KEYWORDS, PHP_LITERALS, PHP_BUILTIN, PHP_OTHER],
        Language::Qml => [QML_TYPES, QML_KEYWORDS, QML_LITERALS, QML_BUILTIN, QML_OTHER],
        Language::Python => [PY_TYPES, PY_KEYWORDS, PY_LITERALS, PY_BUILTIN, PY_OTHER],
        Language::Rust => [RUST_TYPES, RUST_KEYWORDS, RUST_LITERALS, RUST_BUILTIN, RUST_OTHER],
        Language::Java => [JAVA_TYPES, JAVA_KEYWORDS, JAVA_LITERALS, JAVA_BUILTIN, JAVA_OTHER],
        Language::CSharp => [
            CSHARP_TYPES,
            CSHARP_KEYWORDS,
            CSHARP_LITERALS,
            CSHARP_BUILTIN,
            CSHARP_OTHER,
        ],
        Language::Go => [GO_TYPES, GO_KEYWORDS, GO_LITERALS, GO_BUILTIN, GO_OTHER],
        Language::V => [V_TYPES, V_KEYWORDS, V_LITERALS, V_BUILTIN, V_OTHER],
        Language::Sql => [SQL_TYPES, SQL_KEYWORDS, SQL_LITERALS, SQL_BUILTIN, SQL_OTHER],
        Language::Json => [JSON_TYPES, JSON_KEYWORDS, JSON_LITERALS, JSON_BUILTIN, JSON_OTHER],
        Language::Css => [CSS_TYPES, CSS_KEYWORDS, CSS_LITERALS, CSS_BUILTIN, CSS_OTHER],
        Language::Xml => [&[], &[], &[], &[], &[]],
    }
}

fn line_comment(language: Language) -> Option<char> {
    match language {
        Language::Bash | Language::Python => Some('#'),
        _ => None,
    }
}

/// The default provider over the built-in tables.
#[derive(Debug)]
pub struct BuiltinLexemes {
    sets: Vec<LexemeSet>,
    tags: HashMap<&'static str, Language>,
}

impl BuiltinLexemes {
    fn build() -> Self {
        let sets = Language::ALL
            .iter()
            .map(|language| LexemeSet::new(tables(*language), line_comment(*language)))
            .collect();
        Self {
            sets,
            tags: TAGS.iter().copied().collect(),
        }
    }

    /// Process-wide instance, indexed on first use.
    pub fn shared() -> &'static BuiltinLexemes {
        static LEXEMES: OnceLock<BuiltinLexemes> = OnceLock::new();
        LEXEMES.get_or_init(BuiltinLexemes::build)
    }

    /// Every tag this provider resolves.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tags.keys().copied()
    }
}

impl LexemeProvider for BuiltinLexemes {
    fn language_for_tag(&self, tag: &str) -> Option<Language> {
        self.tags.get(tag).copied()
    }

    fn lexemes(&self, language: Language) -> &LexemeSet {
        // `sets` is built from `Language::ALL`, whose order matches the discriminants.
        &self.sets[language as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rust", Some(Language::Rust))]
    #[case("py", Some(Language::Python))]
    #[case("python", Some(Language::Python))]
    #[case("c++", Some(Language::Cpp))]
    #[case("c#", Some(Language::CSharp))]
    #[case("go", Some(Language::Go))]
    #[case("javascript", Some(Language::Js))]
    #[case("html", Some(Language::Xml))]
    #[case("SQL", Some(Language::Sql))]
    #[case("Rust", None)]
    #[case("PYTHON", None)]
    #[case("", None)]
    #[case("brainfuck", None)]
    fn resolves_fence_tags(#[case] tag: &str, #[case] expected: Option<Language>) {
        assert_eq!(BuiltinLexemes::shared().language_for_tag(tag), expected);
    }

    #[test]
    fn sets_line_up_with_languages() {
        let lexemes = BuiltinLexemes::shared();
        for language in Language::ALL {
            // indexing must not panic and must give the language's own comment marker
            assert_eq!(lexemes.lexemes(language).line_comment, line_comment(language));
        }
        assert!(lexemes.lexemes(Language::Rust).keywords.contains("fn"));
        assert!(lexemes.lexemes(Language::Xml).keywords.is_empty());
    }

    #[test]
    fn candidates_are_longest_first() {
        let bucket = WordBucket::from_words(&["static", "static_cast", "sizeof"]);
        assert_eq!(bucket.candidates('s'), &["static_cast", "static", "sizeof"]);
        assert!(bucket.candidates('x').is_empty());
    }

    #[test]
    fn classify_follows_priority() {
        let set = LexemeSet::new(
            [&["int"], &["int", "if"], &["true"], &["printf"], &["define"]],
            None,
        );
        assert_eq!(set.classify("int"), Some(Category::Type));
        assert_eq!(set.classify("if"), Some(Category::Keyword));
        assert_eq!(set.classify("true"), Some(Category::Literal));
        assert_eq!(set.classify("printf"), Some(Category::BuiltIn));
        assert_eq!(set.classify("define"), Some(Category::Other));
        assert_eq!(set.classify("banana"), None);
    }

    #[test]
    fn shell_and_python_use_hash_comments() {
        let lexemes = BuiltinLexemes::shared();
        assert_eq!(lexemes.lexemes(Language::Bash).line_comment, Some('#'));
        assert_eq!(lexemes.lexemes(Language::Python).line_comment, Some('#'));
        assert_eq!(lexemes.lexemes(Language::Rust).line_comment, None);
    }
}
