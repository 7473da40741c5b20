use snipforge_core::{MemorySource, Snippet};

/// Create a new empty source for testing
#[allow(dead_code)]
pub fn new_source() -> MemorySource {
    MemorySource::new()
}

/// Create a test snippet with the given name and content
#[allow(dead_code)]
pub fn make_snippet(name: &str, content: &str) -> Snippet {
    Snippet::new(name.to_string(), content.to_string(), None).unwrap()
}

/// Build a source pre-loaded with (name, content) pairs
#[allow(dead_code)]
pub fn source_with(entries: &[(&str, &str)]) -> MemorySource {
    let mut source = MemorySource::new();
    for (name, content) in entries {
        source.insert(make_snippet(name, content));
    }
    source
}

/// Setup a linear reference chain: head -> {{next}} -> ... -> tail
///
/// Returns the generated snippet names in chain order.
#[allow(dead_code)]
pub fn setup_chain(source: &mut MemorySource, length: usize) -> Vec<String> {
    let names: Vec<String> = (0..length).map(|i| format!("chain_{i}")).collect();

    for (i, name) in names.iter().enumerate() {
        let content = match names.get(i + 1) {
            Some(next) => format!("[{i}] {{{{{next}}}}}"),
            None => format!("[{i}] end"),
        };
        source.insert(make_snippet(name, &content));
    }

    names
}
