//! Pair enumeration and threshold filtering.

use crate::contrast::{ContrastScore, WcagLevel};
use crate::error::ColorError;
use crate::style::{qualify_styles, PaintStyle, SolidStyle};
use serde::{Deserialize, Serialize};

/// Default minimum contrast (WCAG AA for large text and UI components).
pub const DEFAULT_MIN_CONTRAST: f64 = 3.0;

/// How pairs are generated from the qualifying styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Enumeration {
    /// Every ordered pair, self-pairs included: N² evaluations.
    #[default]
    CrossProduct,
    /// Each unordered pair once, self-pairs included: N(N+1)/2 evaluations.
    Unordered,
}

impl Enumeration {
    /// Number of pairs evaluated for `n` styles.
    #[must_use]
    pub const fn pair_count(self, n: usize) -> usize {
        match self {
            Self::CrossProduct => n * n,
            Self::Unordered => n * (n + 1) / 2,
        }
    }
}

/// Contrast engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Inclusive acceptance threshold
    pub min_contrast: f64,
    /// Pair generation strategy
    pub enumeration: Enumeration,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            min_contrast: DEFAULT_MIN_CONTRAST,
            enumeration: Enumeration::CrossProduct,
        }
    }
}

impl ContrastConfig {
    /// Set the threshold.
    #[must_use]
    pub const fn with_min_contrast(mut self, min_contrast: f64) -> Self {
        self.min_contrast = min_contrast;
        self
    }

    /// Set the enumeration strategy.
    #[must_use]
    pub const fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    /// Reject a non-finite or negative threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidThreshold`].
    pub fn validate(&self) -> Result<(), ColorError> {
        if self.min_contrast.is_finite() && self.min_contrast >= 0.0 {
            Ok(())
        } else {
            Err(ColorError::InvalidThreshold(self.min_contrast))
        }
    }
}

/// Two styles whose contrast cleared the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Outer-loop style
    pub first: SolidStyle,
    /// Inner-loop style
    pub second: SolidStyle,
    /// Floored contrast ratio
    pub contrast: ContrastScore,
    /// Positions of `first` and `second` in the scored slice
    pub indices: (usize, usize),
}

impl ColorPair {
    /// Score two styles given as `(index, style)`, as yielded by `enumerate`.
    #[must_use]
    pub fn score(first: (usize, &SolidStyle), second: (usize, &SolidStyle)) -> Self {
        let ((i, a), (j, b)) = (first, second);
        Self {
            first: a.clone(),
            second: b.clone(),
            contrast: ContrastScore::from_luminances(a.luminance, b.luminance),
            indices: (i, j),
        }
    }

    /// WCAG level reached by this pair.
    #[must_use]
    pub fn level(&self) -> WcagLevel {
        WcagLevel::classify(self.contrast)
    }

    /// Whether both sides are the same entry of the scored slice.
    ///
    /// Two distinct styles with equal names and colors are not a self-pair.
    #[must_use]
    pub const fn is_self_pair(&self) -> bool {
        self.indices.0 == self.indices.1
    }
}

/// Append-only accumulator of accepted pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairSet {
    pairs: Vec<ColorPair>,
    evaluated: usize,
}

impl PairSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted pairs in enumeration order.
    #[must_use]
    pub fn pairs(&self) -> &[ColorPair] {
        &self.pairs
    }

    /// Number of accepted pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs scored so far, accepted or not.
    #[must_use]
    pub const fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Iterate over accepted pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorPair> {
        self.pairs.iter()
    }

    fn record(&mut self, pair: ColorPair, accepted: bool) {
        self.evaluated += 1;
        if accepted {
            self.pairs.push(pair);
        }
    }
}

impl<'a> IntoIterator for &'a PairSet {
    type Item = &'a ColorPair;
    type IntoIter = std::slice::Iter<'a, ColorPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Score every pair of `styles` and append those meeting the threshold.
///
/// The accumulator is taken by value and returned so callers can chain
/// several batches into one set.
#[must_use]
pub fn enumerate_pairs(
    styles: &[SolidStyle],
    config: &ContrastConfig,
    mut acc: PairSet,
) -> PairSet {
    for (i, first) in styles.iter().enumerate() {
        let start = match config.enumeration {
            Enumeration::CrossProduct => 0,
            Enumeration::Unordered => i,
        };
        for (j, second) in styles.iter().enumerate().skip(start) {
            let pair = ColorPair::score((i, first), (j, second));
            let accepted = pair.contrast.meets(config.min_contrast);
            acc.record(pair, accepted);
        }
    }
    acc
}

/// Filter `styles` and enumerate accessible pairs in one pass.
///
/// Non-qualifying styles are dropped silently; use [`qualify_styles`]
/// directly to inspect them.
#[must_use]
pub fn find_accessible_pairs(styles: &[PaintStyle], config: &ContrastConfig) -> PairSet {
    let qualification = qualify_styles(styles);
    enumerate_pairs(&qualification.qualified, config, PairSet::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Paint, PaintType};

    fn palette() -> Vec<SolidStyle> {
        vec![
            SolidStyle::new("White", Color::WHITE),
            SolidStyle::new("Black", Color::BLACK),
            SolidStyle::new("Navy", Color::new(0.0, 0.0, 0.5)),
            SolidStyle::new("Red", Color::new(1.0, 0.0, 0.0)),
        ]
    }

    #[test]
    fn test_cross_product_evaluates_n_squared() {
        let set = enumerate_pairs(&palette(), &ContrastConfig::default(), PairSet::new());
        assert_eq!(set.evaluated(), 16);
        assert!(set.len() <= 16);
    }

    #[test]
    fn test_cross_product_keeps_both_orders() {
        let set = enumerate_pairs(&palette(), &ContrastConfig::default(), PairSet::new());
        let has = |a: &str, b: &str| {
            set.iter()
                .any(|p| p.first.name == a && p.second.name == b)
        };
        assert!(has("White", "Black"));
        assert!(has("Black", "White"));
    }

    #[test]
    fn test_accepted_pairs_in_enumeration_order() {
        let set = enumerate_pairs(&palette(), &ContrastConfig::default(), PairSet::new());
        let names: Vec<_> = set
            .iter()
            .map(|p| (p.first.name.as_str(), p.second.name.as_str()))
            .collect();
        assert_eq!(
            names,
            [
                ("White", "Black"),
                ("White", "Navy"),
                ("White", "Red"),
                ("Black", "White"),
                ("Black", "Red"),
                ("Navy", "White"),
                ("Navy", "Red"),
                ("Red", "White"),
                ("Red", "Black"),
                ("Red", "Navy"),
            ]
        );
    }

    #[test]
    fn test_threshold_is_inclusive_and_configurable() {
        let strict = ContrastConfig::default().with_min_contrast(4.5);
        let set = enumerate_pairs(&palette(), &strict, PairSet::new());
        // Red on white (3.99) drops out; red on black (5.25) stays.
        assert!(!set.iter().any(|p| p.first.name == "Red" && p.second.name == "White"));
        assert!(set.iter().any(|p| p.first.name == "Red" && p.second.name == "Black"));
        assert!(set.iter().all(|p| p.contrast.value() >= 4.5));
    }

    #[test]
    fn test_zero_threshold_accepts_self_pairs() {
        let config = ContrastConfig::default().with_min_contrast(0.0);
        let set = enumerate_pairs(&palette(), &config, PairSet::new());
        assert_eq!(set.len(), 16);
        assert_eq!(set.iter().filter(|p| p.is_self_pair()).count(), 4);
    }

    #[test]
    fn test_unordered_halves_the_work() {
        let config = ContrastConfig::default().with_enumeration(Enumeration::Unordered);
        let set = enumerate_pairs(&palette(), &config, PairSet::new());
        assert_eq!(set.evaluated(), 10);
        // White/Black, White/Navy, White/Red, Black/Red, Navy/Red
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_unordered_matches_cross_product_up_to_order() {
        let cross = enumerate_pairs(&palette(), &ContrastConfig::default(), PairSet::new());
        let unordered = enumerate_pairs(
            &palette(),
            &ContrastConfig::default().with_enumeration(Enumeration::Unordered),
            PairSet::new(),
        );
        for pair in &unordered {
            assert!(cross.iter().any(|c| c.first.name == pair.first.name
                && c.second.name == pair.second.name
                && c.contrast == pair.contrast));
            assert!(cross.iter().any(|c| c.first.name == pair.second.name
                && c.second.name == pair.first.name));
        }
    }

    #[test]
    fn test_accumulator_is_chained() {
        let config = ContrastConfig::default();
        let styles = palette();
        let acc = enumerate_pairs(&styles[..2], &config, PairSet::new());
        let acc = enumerate_pairs(&styles[2..], &config, acc);
        assert_eq!(acc.evaluated(), 8);
        // White/Black and Navy/Red, both orders; no cross-batch pairs
        assert_eq!(acc.len(), 4);
    }

    #[test]
    fn test_empty_input_empty_output() {
        let set = enumerate_pairs(&[], &ContrastConfig::default(), PairSet::new());
        assert!(set.is_empty());
        assert_eq!(set.evaluated(), 0);
    }

    #[test]
    fn test_find_accessible_pairs_filters_first() {
        let styles = vec![
            PaintStyle::solid("White", Color::WHITE),
            PaintStyle::new("Scrim", vec![Paint::solid(Color::BLACK).with_opacity(0.4)]),
            PaintStyle::new("Sky", vec![Paint::other(PaintType::GradientLinear)]),
            PaintStyle::solid("Black", Color::BLACK),
        ];
        let set = find_accessible_pairs(&styles, &ContrastConfig::default());
        assert_eq!(set.evaluated(), 4);
        assert_eq!(set.len(), 2);
        assert!(set
            .iter()
            .all(|p| p.first.name != "Scrim" && p.second.name != "Sky"));
    }

    #[test]
    fn test_pair_level() {
        let pair = ColorPair::score(
            (0, &SolidStyle::new("White", Color::WHITE)),
            (1, &SolidStyle::new("Black", Color::BLACK)),
        );
        assert_eq!(pair.level(), WcagLevel::Aaa);
    }

    #[test]
    fn test_duplicate_styles_are_not_self_pairs() {
        let twins = vec![
            SolidStyle::new("Ink", Color::BLACK),
            SolidStyle::new("Ink", Color::BLACK),
        ];
        let config = ContrastConfig::default().with_min_contrast(0.0);
        let set = enumerate_pairs(&twins, &config, PairSet::new());
        assert_eq!(set.len(), 4);
        let indices: Vec<_> = set.iter().map(|p| p.indices).collect();
        assert_eq!(indices, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(set.iter().filter(|p| p.is_self_pair()).count(), 2);
        assert!(!set.pairs()[1].is_self_pair());
        assert_eq!(set.pairs()[1].first, set.pairs()[1].second);
    }

    #[test]
    fn test_config_validate() {
        assert!(ContrastConfig::default().validate().is_ok());
        assert!(ContrastConfig::default().with_min_contrast(0.0).validate().is_ok());
        assert_eq!(
            ContrastConfig::default().with_min_contrast(-2.0).validate(),
            Err(ColorError::InvalidThreshold(-2.0))
        );
        assert!(ContrastConfig::default()
            .with_min_contrast(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: ContrastConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ContrastConfig::default());

        let config: ContrastConfig =
            serde_json::from_str(r#"{"min_contrast":4.5,"enumeration":"unordered"}"#).unwrap();
        assert_eq!(config.min_contrast, 4.5);
        assert_eq!(config.enumeration, Enumeration::Unordered);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(Enumeration::CrossProduct.pair_count(5), 25);
        assert_eq!(Enumeration::Unordered.pair_count(5), 15);
        assert_eq!(Enumeration::Unordered.pair_count(0), 0);
    }
}
