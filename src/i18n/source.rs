//! Lookup sources consulted by the resolver, in order

/// A table of localized strings the resolver can consult.
///
/// Sources are tried in sequence; the first one that yields a value for
/// `(key, lang)` wins. Returning `None` passes the key on to the next source.
pub trait LookupSource {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Value for `key` in `lang`, if this source can provide one
    fn lookup(&self, key: &str, lang: &str) -> Option<&str>;

    /// Every key this source knows about
    fn keys(&self) -> Vec<&str>;
}
