use sentiview_core::SentimentLabel;

/// Aggregated result of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Mean polarity across all rows. `0.0` for an empty table.
    pub mean_polarity: f32,
}

impl SentimentSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    #[must_use]
    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Share of `label` in percent. `0.0` for an empty table.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = self.count(label) as f32 / total as f32 * 100.0;
        share
    }

    /// Labels present in the table, largest count first.
    ///
    /// Zero-count labels are omitted; ties keep display order
    /// (Positive, Neutral, Negative).
    #[must_use]
    pub fn counts_desc(&self) -> Vec<(SentimentLabel, usize)> {
        let mut counts: Vec<(SentimentLabel, usize)> = SentimentLabel::ALL
            .iter()
            .map(|&label| (label, self.count(label)))
            .filter(|&(_, count)| count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}
