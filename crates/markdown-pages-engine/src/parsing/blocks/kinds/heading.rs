/// ATX heading block type with owned marker constant.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level HTML has a tag for.
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `block` opens with 1 to 6 markers and a space.
    ///
    /// Seven or more markers, or markers not followed by a space, are not a
    /// heading.
    pub fn level(block: &str) -> Option<u8> {
        let hashes = block.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        // markers are ASCII, so `hashes` is also a byte offset
        block[hashes..]
            .starts_with(' ')
            .then_some(hashes as u8)
    }

    /// Heading text with markers and surrounding whitespace removed.
    pub fn text(block: &str) -> &str {
        block.trim_start_matches(Self::MARKER).trim()
    }
}
