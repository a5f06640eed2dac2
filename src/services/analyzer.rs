use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use jieba_rs::Jieba;
use regex::Regex;

use crate::domain::{
    frequency_table::{FrequencyTable, WordCount},
    page::BodyText,
};

pub const DEFAULT_TOP_N: usize = 20;

const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
const CJK_PUNCTUATION: &str = "！？｡。＂＃＄％＆＇（）＊＋，－／：；＜＝＞＠［＼］＾＿｀｛｜｝～｟📐｢｣､、〃》「」『』【】〔〕〖〗〘〙〚〛〜〝〞〟〰〾〿–—‘’‛“”„‟…‧﹏.";

/// Turns page text into a ranked word list. Holds the segmentation
/// dictionary, so build it once and share it.
pub struct FrequencyAnalyzer {
    jieba: Jieba,
    tag_pattern: Regex,
    whitespace_pattern: Regex,
    punctuation: HashSet<char>,
    top_n: usize,
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        FrequencyAnalyzer::new(DEFAULT_TOP_N)
    }
}

impl FrequencyAnalyzer {
    pub fn new(top_n: usize) -> Self {
        FrequencyAnalyzer {
            jieba: Jieba::new(),
            tag_pattern: Regex::new(r"<.*?>").unwrap(),
            whitespace_pattern: Regex::new(r"\s+").unwrap(),
            punctuation: ASCII_PUNCTUATION.chars().chain(CJK_PUNCTUATION.chars()).collect(),
            top_n,
        }
    }

    pub fn analyze(&self, body: &BodyText) -> FrequencyTable {
        let cleaned = self.clean(body.as_str());
        let tokens = self.tokenize(&cleaned);

        self.rank(tokens)
    }

    /// Drops tags, all whitespace and punctuation. Words on neighbouring
    /// lines end up glued together.
    pub fn clean(&self, text: &str) -> String {
        let without_tags = self.tag_pattern.replace_all(text, "");
        let without_whitespace = self.whitespace_pattern.replace_all(&without_tags, "");

        without_whitespace
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect()
    }

    pub fn tokenize<'a>(&self, cleaned: &'a str) -> Vec<&'a str> {
        self.jieba.cut(cleaned, true)
    }

    fn rank(&self, tokens: Vec<&str>) -> FrequencyTable {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<WordCount> = vec![];

        for token in tokens {
            match positions.get(token) {
                Some(&i) => counts[i].count += 1,
                None => {
                    positions.insert(token, counts.len());
                    counts.push(WordCount::new(token, 1));
                }
            }
        }

        // sorted_by is stable, so ties stay in first-seen order
        counts
            .into_iter()
            .filter(|wc| wc.word.chars().count() > 1)
            .sorted_by(|a, b| b.count.cmp(&a.count))
            .take(self.top_n)
            .collect::<Vec<WordCount>>()
            .into()
    }
}
