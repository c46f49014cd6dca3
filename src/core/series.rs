//! Named sample series and the collection rendered by a chart.

use std::collections::BTreeMap;

use crate::core::color::AnsiCode;

/// One line: finite samples, oldest first, plus an optional line colour.
/// Without a colour of its own a series falls back to the chart default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub samples: Vec<f64>,
    pub color: Option<AnsiCode>,
}

impl Series {
    #[must_use]
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: AnsiCode) -> Self {
        self.color = Some(color);
        self
    }

    /// Append one sample at the newest end.
    #[inline]
    pub fn push(&mut self, v: f64) {
        self.samples.push(v);
    }

    /// Drop oldest samples so at most `keep` remain.
    pub fn truncate_front(&mut self, keep: usize) {
        if self.samples.len() > keep {
            self.samples.drain(..self.samples.len() - keep);
        }
    }
}

/// Series keyed by name.
///
/// The map is a `BTreeMap` on purpose: iteration order is lexicographic by
/// name, which fixes the order series are plotted in.  When two lines land
/// on the same cell the later name wins, every frame, in both render modes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    map: BTreeMap<String, Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, series: Series) {
        self.map.insert(name.into(), series);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.map.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.map.get_mut(name)
    }

    /// Series that actually contribute to a render pass.
    #[must_use]
    pub fn usable(&self) -> usize {
        self.map.values().filter(|s| !s.samples.is_empty()).count()
    }

    /// First non-empty series in name order; the source of synthesized
    /// x-axis labels.
    #[must_use]
    pub fn first_non_empty(&self) -> Option<&Series> {
        self.map.values().find(|s| !s.samples.is_empty())
    }

    /// Name-ordered iteration: the render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Series)> {
        self.map.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(String, Series)> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = (String, Series)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
