pub mod event;
pub mod export;
pub mod init;
pub mod project;
pub mod status;
pub mod task;

pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("Dock", 10), "Dock");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("Sail to the edge of the world", 10), "Sail to...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("🏴‍☠️🏴‍☠️🏴‍☠️🏴‍☠️", 2), "...");
        assert_eq!(truncate("ワンピースを探す旅", 6), "ワンピ...");
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds(s in "\\PC{0,80}", max in 3usize..50) {
            prop_assert!(truncate(&s, max).chars().count() <= max);
        }
    }
}
