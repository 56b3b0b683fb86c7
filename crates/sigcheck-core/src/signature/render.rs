use super::ByteDescriptor;

/// Render a pattern as a search string for disassembler tooling, e.g.
/// `55 8b .. ec`.
pub fn render(pattern: &[ByteDescriptor]) -> String {
    pattern
        .iter()
        .map(|descriptor| match descriptor {
            ByteDescriptor::Exact(value) => format!("{:02x}", value),
            ByteDescriptor::Wildcard => "..".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
