//! Liked Patches Cache
//!
//! Client-side replica of the signed-in viewer's like relations. Views read
//! it to seed their toggles; `LikeToggle` never touches it.

use std::collections::HashSet;

/// Set of patch ids the current viewer likes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedPatches {
    ids: HashSet<String>,
}

impl LikedPatches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, patch_id: &str) -> bool {
        self.ids.contains(patch_id)
    }

    /// Record a confirmed relation value for `patch_id`
    pub fn record(&mut self, patch_id: &str, liked: bool) {
        if liked {
            self.ids.insert(patch_id.to_string());
        } else {
            self.ids.remove(patch_id);
        }
    }

    /// Replace the whole cache with a fresh server listing
    pub fn replace<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LikedPatches {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_like_and_unlike() {
        let mut liked = LikedPatches::new();
        liked.record("p1", true);
        liked.record("p1", true);
        assert!(liked.contains("p1"));
        assert_eq!(liked.len(), 1);

        liked.record("p1", false);
        assert!(!liked.contains("p1"));
        assert!(liked.is_empty());
    }

    #[test]
    fn test_replace_drops_stale_ids() {
        let mut liked: LikedPatches = ["p1", "p2"].into_iter().collect();
        liked.replace(vec!["p3".to_string()]);
        assert!(!liked.contains("p1"));
        assert!(liked.contains("p3"));
    }
}
