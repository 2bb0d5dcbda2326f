//! Word-frequency ranking over stored questions

use std::collections::HashMap;

use crate::models::WordCount;

/// Split text into lowercase words
///
/// The text is lowercased before splitting, so marks introduced by
/// lowercasing act as separators. A word is a maximal run of alphanumeric or
/// underscore characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Counts words in first-seen order
#[derive(Debug, Default)]
pub struct WordCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `text`
    pub fn add_text(&mut self, text: &str) {
        for word in tokenize(text) {
            match self.index.get(&word) {
                Some(&slot) => self.counts[slot].1 += 1,
                None => {
                    self.index.insert(word.clone(), self.counts.len());
                    self.counts.push((word, 1));
                }
            }
        }
    }

    /// The `n` most frequent words; equal counts keep first-seen order
    pub fn most_common(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<&(String, u64)> = self.counts.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, count)| WordCount {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Top `n` words across a set of questions
pub fn top_words<I, S>(questions: I, n: usize) -> Vec<WordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = WordCounter::new();
    for question in questions {
        counter.add_text(question.as_ref());
    }
    counter.most_common(n)
}
