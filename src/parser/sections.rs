/// Marker line that opens the parse-tree section.
pub const TREE_MARKER: &str = "TREE:";
/// Marker line that opens the original triad listing.
pub const TRIADS_ORIGINAL_MARKER: &str = "Исходные триады:";
/// Marker line that opens the optimized triad listing.
pub const TRIADS_OPTIMIZED_MARKER: &str = "Триады после оптимизации:";

/// Which part of the result stream subsequent lines belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before any marker: lines are candidate lexeme records.
    #[default]
    None,
    Tree,
    TriadsOriginal,
    TriadsOptimized,
}

const TRANSITIONS: [(&str, Section); 3] = [
    (TREE_MARKER, Section::Tree),
    (TRIADS_ORIGINAL_MARKER, Section::TriadsOriginal),
    (TRIADS_OPTIMIZED_MARKER, Section::TriadsOptimized),
];

impl Section {
    /// Section that `line` switches to, if it is a marker line.
    ///
    /// Markers are matched at the start of the line and apply in every state,
    /// including before the first section.
    pub fn transition(line: &str) -> Option<Section> {
        TRANSITIONS
            .iter()
            .find(|(marker, _)| line.starts_with(marker))
            .map(|&(_, section)| section)
    }
}
