/// Count case-insensitive mentions of a brand name in an answer, requiring
/// ASCII word boundaries on both sides so "PlantPost" does not match inside
/// "PlantPostal". Used by the visibility check to tally share of voice.
pub fn count_mentions(answer: &str, name: &str) -> u32 {
    let name = name.trim();
    if name.is_empty() || answer.is_empty() {
        return 0;
    }

    let haystack = answer.to_lowercase();
    let needle = name.to_lowercase();
    let bytes = haystack.as_bytes();

    let mut count = 0u32;
    let mut start = 0usize;
    while let Some(found) = haystack[start..].find(&needle) {
        let at = start + found;
        let end = at + needle.len();
        let boundary_before = at == 0 || !bytes[at - 1].is_ascii_alphanumeric();
        let boundary_after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if boundary_before && boundary_after {
            count += 1;
        }
        start = end;
    }
    count
}
