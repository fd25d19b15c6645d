//! Promote runs of short lines to Markdown bullet lists.
//!
//! Exports often flatten lists into one short line per item:
//!
//! ```text
//! The stack we used:          The stack we used:
//! Shopify                →
//! Klaviyo                     - Shopify
//! Gorgias                     - Klaviyo
//!                             - Gorgias
//! ```
//!
//! This is a heuristic. Short prose lines without punctuation can be picked
//! up too, which is acceptable for a one-time cleanup.

/// Longest line (in characters) still considered a list item.
const MAX_ITEM_LEN: usize = 80;

/// Minimum number of consecutive candidates that form a list.
const MIN_ITEMS: usize = 3;

/// Whether a line looks like a flattened list item.
pub fn is_list_item_candidate(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !trimmed.starts_with(['#', '>', '-', '`'])
        && trimmed.chars().count() <= MAX_ITEM_LEN
        && !trimmed.contains(['.', '!', '?', ':'])
}

/// Rewrite runs of 3+ candidate lines that follow an intro line as bullets.
///
/// Blank lines inside a run are skipped. Shorter runs are left as they are.
/// Bullet lines start with `-` and are never candidates, so a second pass
/// leaves existing lists alone.
pub fn enhance_lists(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if !line.trim().is_empty() && !is_list_item_candidate(line) {
            let mut j = i + 1;
            let mut items = Vec::new();

            while let Some(next) = lines.get(j) {
                if next.trim().is_empty() {
                    j += 1;
                } else if is_list_item_candidate(next) {
                    items.push(next.trim());
                    j += 1;
                } else {
                    break;
                }
            }

            if items.len() >= MIN_ITEMS {
                out.push(line.to_owned());
                out.push(String::new());
                out.extend(items.iter().map(|item| format!("- {item}")));
                out.push(String::new());
                i = j;
                continue;
            }
        }

        out.push(line.to_owned());
        i += 1;
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_rules() {
        assert!(is_list_item_candidate("Shopify"));
        assert!(is_list_item_candidate("  Email flows  "));
        assert!(!is_list_item_candidate(""));
        assert!(!is_list_item_candidate("   "));
        assert!(!is_list_item_candidate("# Heading"));
        assert!(!is_list_item_candidate("> quote"));
        assert!(!is_list_item_candidate("- item"));
        assert!(!is_list_item_candidate("---"));
        assert!(!is_list_item_candidate("```rust"));
        assert!(!is_list_item_candidate("A full sentence."));
        assert!(is_list_item_candidate("Really"));
    }

    #[test]
    fn test_candidate_punctuation_and_length() {
        assert!(!is_list_item_candidate("Wow!"));
        assert!(!is_list_item_candidate("Why?"));
        assert!(!is_list_item_candidate("Label: value"));
        assert!(is_list_item_candidate(&"x".repeat(80)));
        assert!(!is_list_item_candidate(&"x".repeat(81)));
    }

    #[test]
    fn test_two_items_unchanged() {
        let input = "Tools we used.\nShopify\nKlaviyo\n\nClosing sentence.";
        assert_eq!(enhance_lists(input), input);
    }

    #[test]
    fn test_three_items_become_list() {
        let input = "Tools we used.\nShopify\nKlaviyo\nGorgias\nClosing sentence.";
        let expected = "Tools we used.\n\n- Shopify\n- Klaviyo\n- Gorgias\n\nClosing sentence.";
        assert_eq!(enhance_lists(input), expected);
    }

    #[test]
    fn test_blank_lines_inside_run_are_skipped() {
        let input = "Stack:\n\nShopify\n\nKlaviyo\n\nGorgias\n\nDone.";
        let expected = "Stack:\n\n- Shopify\n- Klaviyo\n- Gorgias\n\nDone.";
        assert_eq!(enhance_lists(input), expected);
    }

    #[test]
    fn test_run_without_intro_is_unchanged() {
        let input = "Shopify\nKlaviyo\nGorgias";
        assert_eq!(enhance_lists(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "## Stack\nShopify\nKlaviyo\nGorgias\nRecharge\n\nThat is all.";
        let once = enhance_lists(input);
        assert_eq!(enhance_lists(&once), once);
    }
}
