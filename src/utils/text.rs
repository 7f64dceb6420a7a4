//! String helpers for SAS source text and display formatting.

use regex::Regex;
use std::collections::HashMap;

/// Strip balanced `/* ... */` comment blocks from SAS source text.
///
/// Works line-wise: lines are trimmed, comment spans (single-line or
/// spanning multiple lines) are removed, and blank lines are dropped.
/// Non-comment content sharing a line with a comment is preserved.
pub fn remove_comments(text: &str) -> String {
    let mut in_block = false;
    let mut kept: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        let mut out = String::new();
        let mut rest = line;

        loop {
            if in_block {
                match rest.find("*/") {
                    Some(end) => {
                        rest = &rest[end + 2..];
                        in_block = false;
                    }
                    None => break,
                }
            } else {
                match rest.find("/*") {
                    Some(start) => {
                        out.push_str(&rest[..start]);
                        rest = &rest[start + 2..];
                        in_block = true;
                    }
                    None => {
                        out.push_str(rest);
                        break;
                    }
                }
            }
        }

        let out = out.trim();
        if !out.is_empty() {
            kept.push(out.to_string());
        }
    }

    kept.join("\n")
}

/// Elements of `x` absent from `y`, preserving `x`'s order and duplicates.
pub fn diff<T: PartialEq + Clone>(x: &[T], y: &[T]) -> Vec<T> {
    x.iter().filter(|a| !y.contains(a)).cloned().collect()
}

/// Split text into contiguous pieces of at most `max_length` characters.
///
/// Returns the whole text as a single piece when it already fits. Pieces
/// concatenate back to the original text.
pub fn chunk(text: &str, max_length: usize) -> Vec<String> {
    if max_length == 0 || text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let re = match Regex::new(&format!("(?s).{{1,{}}}", max_length)) {
        Ok(re) => re,
        Err(_) => return vec![text.to_string()],
    };
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Map service basename to its full path, first occurrence wins.
pub fn unique_services(services: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for service in services {
        let name = service.rsplit('/').next().unwrap_or(service);
        map.entry(name.to_string()).or_insert_with(|| service.clone());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_comments_strips_single_line_block() {
        assert_eq!(remove_comments("a\n/* c */\nb"), "a\nb");
    }

    #[test]
    fn remove_comments_strips_multi_line_block() {
        let input = "keep1\n/* start\nmiddle\nend */\nkeep2";
        assert_eq!(remove_comments(input), "keep1\nkeep2");
    }

    #[test]
    fn remove_comments_keeps_code_sharing_a_line_with_a_comment() {
        assert_eq!(remove_comments("before /* gone */ after"), "before  after");
    }

    #[test]
    fn remove_comments_drops_blank_and_whitespace_lines() {
        assert_eq!(remove_comments("a\n\n   \nb"), "a\nb");
    }

    #[test]
    fn remove_comments_trims_lines() {
        assert_eq!(remove_comments("  a  \n\tb"), "a\nb");
    }

    #[test]
    fn diff_preserves_order_and_duplicates() {
        let x = vec!["a", "b", "a", "c"];
        let y = vec!["c"];
        assert_eq!(diff(&x, &y), vec!["a", "b", "a"]);
    }

    #[test]
    fn diff_of_disjoint_slices_is_identity() {
        let x = vec![1, 2, 3];
        assert_eq!(diff(&x, &[]), x);
    }

    #[test]
    fn chunk_returns_whole_text_when_it_fits() {
        assert_eq!(chunk("short", 220), vec!["short".to_string()]);
    }

    #[test]
    fn chunk_pieces_are_bounded_and_concatenate_back() {
        let text = "abcdefghij";
        let pieces = chunk(text, 3);
        assert_eq!(pieces, vec!["abc", "def", "ghi", "j"]);
        assert_eq!(pieces.concat(), text);
    }

    #[test]
    fn chunk_spans_newlines() {
        let text = "ab\ncd";
        let pieces = chunk(text, 2);
        assert_eq!(pieces.concat(), text);
        assert!(pieces.iter().all(|p| p.chars().count() <= 2));
    }

    #[test]
    fn unique_services_keeps_first_occurrence() {
        let services = vec![
            "common/getData".to_string(),
            "admin/getData".to_string(),
            "admin/setData".to_string(),
        ];
        let map = unique_services(&services);
        assert_eq!(map["getData"], "common/getData");
        assert_eq!(map["setData"], "admin/setData");
        assert_eq!(map.len(), 2);
    }
}
