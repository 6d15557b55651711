//! 字符映射表与 LEET 转换函数（纯函数，无副作用）

/// 固定的字母→数字替换表，大小写映射到同一个数字
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterMap;

/// 大写字母及其替换数字（小写在查找时折叠为大写）
const ENTRIES: [(char, char); 10] = [
    ('A', '4'),
    ('E', '3'),
    ('I', '1'),
    ('O', '0'),
    ('S', '5'),
    ('T', '7'),
    ('L', '1'),
    ('G', '6'),
    ('B', '8'),
    ('Z', '2'),
];

impl CharacterMap {
    /// 查找单个字符的替换数字；不在表内返回 None
    pub fn lookup(c: char) -> Option<char> {
        // 只折叠 ASCII，避免 Unicode 大小写规则把其他字母带进映射域
        let key = c.to_ascii_uppercase();
        ENTRIES
            .iter()
            .find(|(letter, _)| *letter == key)
            .map(|(_, digit)| *digit)
    }

    /// 全部映射条目（大写字母, 数字），用于界面对照表
    pub fn entries() -> &'static [(char, char)] {
        &ENTRIES
    }
}

/// 该字符是否会被替换
pub fn is_convertible(c: char) -> bool {
    CharacterMap::lookup(c).is_some()
}

/// 将文本转换为 LEET 风格：逐字符替换，表外字符原样保留
pub fn convert(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().map(|c| CharacterMap::lookup(c).unwrap_or(c)));
    out
}

/// 示例面板的一行：原文与转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionExample {
    pub source: String,
    pub converted: String,
}

/// 通过 convert 生成示例，保证示例与实际转换一致
pub fn conversion_examples(words: &[&str]) -> Vec<ConversionExample> {
    words
        .iter()
        .map(|w| ConversionExample {
            source: (*w).to_string(),
            converted: convert(w),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert(""), "", "空输入应得到空输出");
    }

    #[test]
    fn test_convert_known_words() {
        assert_eq!(convert("Gamer"), "64m3r");
        // 表内 l→1、a→4、s→5，所以均被替换
        assert_eq!(convert("Elite"), "31173");
        assert_eq!(convert("Beast"), "83457");
    }

    #[test]
    fn test_case_insensitive_mapping() {
        for (upper, digit) in CharacterMap::entries() {
            let lower = upper.to_ascii_lowercase();
            assert_eq!(CharacterMap::lookup(*upper), Some(*digit));
            assert_eq!(CharacterMap::lookup(lower), Some(*digit), "小写 {} 应与大写同映射", lower);
        }
    }

    #[test]
    fn test_unmapped_case_preserved() {
        assert_eq!(convert("Mr. Xyz"), "Mr. Xy2");
        assert_eq!(convert("HRM"), "HRM");
        assert_eq!(convert("hrm"), "hrm");
    }

    #[test]
    fn test_passthrough_characters() {
        let samples = ["0123456789", "!@#$%^&*()_+-=", " \t\n", "日本語テキスト", "Ωμέγα", "🚀✨"];
        for s in samples {
            assert_eq!(convert(s), s, "表外字符应原样保留: {}", s);
        }
    }

    #[test]
    fn test_non_ascii_letters_not_folded() {
        // 全角字母与带重音字母不属于映射域
        assert_eq!(convert("ＡÀáÉ"), "ＡÀáÉ");
        assert!(!is_convertible('ſ'), "长 s 不应被视为 S");
    }

    #[test]
    fn test_length_preserved() {
        let samples = ["", "a", "Leet Speak 2024", "混合 Mixed テキスト", "zzzZZZ"];
        for s in samples {
            assert_eq!(convert(s).chars().count(), s.chars().count(), "字符数应保持不变: {}", s);
        }
    }

    #[test]
    fn test_convert_is_stable_under_reapplication() {
        let samples = ["Gamer", "Beast mode ON", "ßtöLz", ""];
        for s in samples {
            let once = convert(s);
            assert_eq!(convert(s), once, "同一输入应得到同一输出");
            assert_eq!(convert(&once), once, "二次转换不应改变结果");
        }
    }

    #[test]
    fn test_is_convertible() {
        assert!(is_convertible('a'));
        assert!(is_convertible('Z'));
        assert!(!is_convertible('m'));
        assert!(!is_convertible('4'));
    }

    #[test]
    fn test_conversion_examples_follow_convert() {
        let examples = conversion_examples(&["Gamer", "Elite"]);
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].source, "Gamer");
        assert_eq!(examples[0].converted, "64m3r");
        assert_eq!(examples[1].converted, convert("Elite"));
    }
}
