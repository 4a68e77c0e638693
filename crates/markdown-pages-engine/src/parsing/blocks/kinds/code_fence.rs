pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the whole block sits between fences.
    pub fn encloses(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// An opening fence line, possibly carrying an info string.
    pub fn opens(line: &str) -> bool {
        line.trim().starts_with(Self::FENCE)
    }

    /// A closing fence line: the fence and nothing else.
    pub fn closes(line: &str) -> bool {
        line.trim() == Self::FENCE
    }
}
