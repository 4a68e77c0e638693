/// Splits a document into blocks separated by one or more blank lines.
///
/// A whitespace-only line counts as blank. Each block is its lines rejoined
/// with `\n` and trimmed as a whole; blocks that trim to nothing are dropped.
pub fn segment_blocks(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    for line in document.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    // EOF flush
    flush(&mut current, &mut blocks);

    blocks
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let joined = current.join("\n");
    current.clear();

    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}
