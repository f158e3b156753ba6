//! Language icon lookup for the detail view.

const DEFAULT_ICON: &str = "icons/icon.png";

/// Known language icons, keyed by the exact tag spelling used in catalogs.
/// File names are not uniform (historical asset names), so the table maps
/// them explicitly instead of deriving paths from the tag.
const ICONS: &[(&str, &str)] = &[
    ("C", "icons/c-64.png"),
    ("C++", "icons/cpp-64.png"),
    ("C#", "icons/csharp-64.png"),
    ("Clojure", "icons/clojure-64.png"),
    ("CoffeeScript", "icons/coffeescript-64.png"),
    ("CSS", "icons/css-64.png"),
    ("Elm", "icons/elm-64.png"),
    ("Go", "icons/golang-64.png"),
    ("Haskell", "icons/haskell-64.png"),
    ("Java", "icons/java-64.png"),
    ("JavaScript", "icons/javascript-64.png"),
    ("Lua", "icons/Lua-64.png"),
    ("Objective-C", "icons/objective-c-64.png"),
    ("Python", "icons/python-64.png"),
    ("Ruby", "icons/ruby-64.png"),
    ("Rust", "icons/rust-64.png"),
    ("Shell", "icons/shell-64.png"),
    ("Swift", "icons/swift-64.png"),
    ("TypeScript", "icons/typescript-64.png"),
    ("Metal", "icons/metal-64.png"),
];

/// Icon path for a language tag. Unknown tags get the generic icon; lookup
/// is case-sensitive, matching how the tags are stored.
pub fn icon_path(language: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(name, _)| *name == language)
        .map_or(DEFAULT_ICON, |(_, path)| *path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_language_has_its_icon() {
        let expected = [
            ("C", "icons/c-64.png"),
            ("C++", "icons/cpp-64.png"),
            ("C#", "icons/csharp-64.png"),
            ("Clojure", "icons/clojure-64.png"),
            ("CoffeeScript", "icons/coffeescript-64.png"),
            ("CSS", "icons/css-64.png"),
            ("Elm", "icons/elm-64.png"),
            ("Go", "icons/golang-64.png"),
            ("Haskell", "icons/haskell-64.png"),
            ("Java", "icons/java-64.png"),
            ("JavaScript", "icons/javascript-64.png"),
            ("Lua", "icons/Lua-64.png"),
            ("Objective-C", "icons/objective-c-64.png"),
            ("Python", "icons/python-64.png"),
            ("Ruby", "icons/ruby-64.png"),
            ("Rust", "icons/rust-64.png"),
            ("Shell", "icons/shell-64.png"),
            ("Swift", "icons/swift-64.png"),
            ("TypeScript", "icons/typescript-64.png"),
            ("Metal", "icons/metal-64.png"),
        ];
        assert_eq!(ICONS.len(), expected.len());
        for (language, path) in expected {
            assert_eq!(icon_path(language), path, "icon for {}", language);
        }
    }

    #[test]
    fn unknown_language_falls_back() {
        assert_eq!(icon_path("Zig"), "icons/icon.png");
        assert_eq!(icon_path(""), "icons/icon.png");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(icon_path("go"), "icons/icon.png");
    }
}
