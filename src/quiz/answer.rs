//! 答案比对：去掉首尾空白并转小写后完全相等

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn answers_match(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_surrounding_whitespace() {
        assert!(answers_match(" Hello ", "Hello"));
        assert!(answers_match("hello", "Hello"));
        assert!(answers_match("xin chào", "Xin chào"));
        assert!(answers_match("XIN CHÀO\n", "  Xin chào"));
    }

    #[test]
    fn inner_whitespace_and_punctuation_still_matter() {
        assert!(!answers_match("xinchào", "Xin chào"));
        assert!(!answers_match("xin chào!", "Xin chào"));
        assert!(!answers_match("xin chao", "Xin chào"));
    }

    #[test]
    fn cjk_is_compared_exactly() {
        assert!(answers_match(" 你好 ", "你好"));
        assert!(!answers_match("您好", "你好"));
    }
}
