use crate::alphabet::{ALPHABET_SIZE, symbol_at, symbol_index};

/// Fixed-fanout trie over the 36-symbol alphabet.
///
/// Child slot `i` always holds the subtree for symbol `i` (`a..=z`, then
/// `0..=9`), so preorder traversal in slot order yields completions with
/// letters sorting before digits. The two entry points are deliberately
/// asymmetric: [`PrefixIndex::insert`] folds case and silently drops
/// out-of-alphabet characters, while [`PrefixIndex::search`] folds case but
/// gives up on the first character it cannot map.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    len: usize,
}

#[derive(Debug, Clone)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_word_end: bool,
}

impl Default for TrieNode {
    fn default() -> Self {
        Self {
            children: [const { None }; ALPHABET_SIZE],
            is_word_end: false,
        }
    }
}

impl PrefixIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct entries marked in the index.
    ///
    /// Entries are counted after folding and filtering, so `"ab-cd"` and
    /// `"ABCD"` occupy one slot between them.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a key, folding to ASCII lowercase and skipping every character
    /// outside the alphabet. Never fails; an empty or fully-filtered key marks
    /// the root itself.
    pub fn insert(&mut self, key: &str) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            let Some(index) = symbol_index(ch) else {
                continue;
            };
            node = node.children[index]
                .get_or_insert_with(|| Box::new(TrieNode::default()))
                .as_mut();
        }
        if !node.is_word_end {
            node.is_word_end = true;
            self.len += 1;
        }
    }

    /// Returns up to `limit` completions of `query` in traversal order.
    ///
    /// The descent is strict: any character that does not map into the
    /// alphabet, or maps to an empty child slot, ends the search with no
    /// results. Enumeration from the arrival node is preorder over ascending
    /// slot indices and stops as soon as `limit` completions are collected.
    /// Output is canonical lowercase.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        let mut node = &self.root;
        let mut buffer = String::with_capacity(query.len());
        for ch in query.chars() {
            let Some(index) = symbol_index(ch) else {
                return Vec::new();
            };
            let Some(child) = node.children[index].as_deref() else {
                return Vec::new();
            };
            buffer.push(symbol_at(index));
            node = child;
        }
        let mut matches = Vec::new();
        node.collect_completions(&mut buffer, limit, &mut matches);
        matches
    }
}

impl TrieNode {
    fn collect_completions(&self, buffer: &mut String, limit: usize, matches: &mut Vec<String>) {
        if self.is_word_end {
            matches.push(buffer.clone());
        }
        for (index, child) in self.children.iter().enumerate() {
            if matches.len() >= limit {
                return;
            }
            let Some(child) = child else {
                continue;
            };
            buffer.push(symbol_at(index));
            child.collect_completions(buffer, limit, matches);
            buffer.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(keys: &[&str]) -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for key in keys {
            index.insert(key);
        }
        index
    }

    #[test]
    fn inserted_key_is_found_under_every_prefix() {
        let index = index_of(&["matrix"]);
        for end in 0..="matrix".len() {
            let hits = index.search(&"matrix"[..end], 10);
            assert!(
                hits.contains(&"matrix".to_string()),
                "prefix {:?} lost the key",
                &"matrix"[..end]
            );
        }
    }

    #[test]
    fn longer_prefix_never_grows_the_result_set() {
        let index = index_of(&["car", "cart", "carton", "cab"]);
        let broad = index.search("ca", 100);
        let narrow = index.search("cart", 100);
        assert!(narrow.iter().all(|hit| broad.contains(hit)));
        assert!(narrow.len() <= broad.len());
    }

    #[test]
    fn insert_skips_out_of_alphabet_characters() {
        let index = index_of(&["ab-cd"]);
        assert_eq!(index.search("abc", 10), vec!["abcd".to_string()]);
        assert_eq!(index.search("abcd", 10), vec!["abcd".to_string()]);
    }

    #[test]
    fn search_aborts_on_out_of_alphabet_characters() {
        let index = index_of(&["ab-cd"]);
        assert!(index.search("ab-cd", 10).is_empty());
        assert!(index.search("ab ", 10).is_empty());
    }

    #[test]
    fn search_aborts_on_missing_child() {
        let index = index_of(&["alpha"]);
        assert!(index.search("alx", 10).is_empty());
        assert!(index.search("b", 10).is_empty());
    }

    #[test]
    fn limit_keeps_a_prefix_of_the_traversal_order() {
        let mut index = PrefixIndex::new();
        for suffix in b'a'..=b'z' {
            index.insert(&format!("a{}", suffix as char));
        }
        assert_eq!(
            index.search("a", 5),
            vec!["aa", "ab", "ac", "ad", "ae"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn letters_enumerate_before_digits() {
        let index = index_of(&["a9", "ab"]);
        assert_eq!(index.search("a", 10), vec!["ab".to_string(), "a9".to_string()]);
    }

    #[test]
    fn reinsertion_is_idempotent() {
        let mut index = PrefixIndex::new();
        index.insert("dune");
        index.insert("dune");
        index.insert("DUNE");
        assert_eq!(index.search("dun", 10), vec!["dune".to_string()]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn case_folds_on_both_paths() {
        let index = index_of(&["Movie"]);
        assert_eq!(index.search("MOV", 10), vec!["movie".to_string()]);
    }

    #[test]
    fn digits_participate_in_keys_and_queries() {
        let index = index_of(&["Blade Runner 2049", "2001"]);
        assert_eq!(index.search("blade", 10), vec!["bladerunner2049".to_string()]);
        assert_eq!(index.search("20", 10), vec!["2001".to_string()]);
    }

    #[test]
    fn empty_query_enumerates_from_the_root() {
        let index = index_of(&["beta", "alpha", "a1"]);
        assert_eq!(
            index.search("", 2),
            vec!["alpha".to_string(), "a1".to_string()]
        );
    }

    #[test]
    fn empty_insert_marks_the_root() {
        let index = index_of(&[""]);
        assert_eq!(index.search("", 10), vec![String::new()]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn fully_filtered_insert_marks_the_root() {
        let index = index_of(&["!!!"]);
        assert_eq!(index.search("", 10), vec![String::new()]);
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let index = index_of(&["any"]);
        assert!(index.search("a", 0).is_empty());
        assert!(index.search("", 0).is_empty());
    }

    #[test]
    fn distinct_raw_keys_folding_to_one_entry_count_once() {
        let index = index_of(&["star wars", "StarWars", "star-wars!"]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.search("star", 10), vec!["starwars".to_string()]);
    }
}
