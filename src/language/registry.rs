use std::collections::HashMap;
use std::sync::LazyLock;

/// Extension keys carry the leading dot, matching how inspection requests
/// derive them from file names.
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    (".ts", "TypeScript"),
    (".tsx", "TypeScript"),
    (".mts", "TypeScript"),
    (".cts", "TypeScript"),
    (".js", "JavaScript"),
    (".jsx", "JavaScript"),
    (".mjs", "JavaScript"),
    (".cjs", "JavaScript"),
    (".rs", "Rust"),
    (".go", "Go"),
    (".py", "Python"),
    (".pyi", "Python"),
    (".java", "Java"),
    (".c", "C"),
    (".h", "C"),
    (".cpp", "C++"),
    (".hpp", "C++"),
    (".cc", "C++"),
    (".cxx", "C++"),
    (".hxx", "C++"),
    (".cs", "C#"),
    (".rb", "Ruby"),
    (".php", "PHP"),
    (".swift", "Swift"),
    (".kt", "Kotlin"),
    (".kts", "Kotlin"),
    (".scala", "Scala"),
    (".sh", "Shell"),
    (".bash", "Shell"),
    (".zsh", "Shell"),
    (".lua", "Lua"),
    (".pl", "Perl"),
    (".r", "R"),
    (".hs", "Haskell"),
    (".ex", "Elixir"),
    (".exs", "Elixir"),
    (".erl", "Erlang"),
    (".clj", "Clojure"),
    (".dart", "Dart"),
    (".m", "Objective-C"),
    (".vue", "Vue"),
    (".html", "HTML"),
    (".htm", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".less", "Less"),
    (".md", "Markdown"),
    (".json", "JSON"),
    (".yml", "YAML"),
    (".yaml", "YAML"),
    (".toml", "TOML"),
    (".xml", "XML"),
    (".sql", "SQL"),
];

static GLOBAL: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::new);

/// Static extension to display-name mapping. Pure lookup, no fuzzy matching,
/// no content sniffing.
#[derive(Debug)]
pub struct LanguageRegistry {
    extension_map: HashMap<&'static str, &'static str>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension_map: EXTENSION_LANGUAGES.iter().copied().collect(),
        }
    }

    /// Process-wide registry, built on first use and never mutated after.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Resolve an extension (with leading dot) to a language display name.
    /// Returns the empty string for unknown extensions.
    #[must_use]
    pub fn resolve(&self, extension: &str) -> &'static str {
        self.extension_map.get(extension).copied().unwrap_or("")
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
