use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: &str, count: usize) -> Self {
        WordCount {
            word: word.to_string(),
            count,
        }
    }
}

/// Ranked words, highest count first. Words with equal counts keep the order
/// in which they first appeared in the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(Vec<WordCount>);

impl FrequencyTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
        self.0.iter()
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<&WordCount> {
        self.0.iter().find(|wc| wc.word == word)
    }

    pub fn words(&self) -> Vec<&str> {
        self.0.iter().map(|wc| wc.word.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.0.iter().map(|wc| wc.count).collect()
    }

    pub fn max_count(&self) -> Option<usize> {
        self.0.iter().map(|wc| wc.count).max()
    }

    pub fn min_count(&self) -> Option<usize> {
        self.0.iter().map(|wc| wc.count).min()
    }
}

impl From<Vec<WordCount>> for FrequencyTable {
    fn from(value: Vec<WordCount>) -> Self {
        FrequencyTable(value)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
