use {
    crate::{
        analysis::{DivideAndConquerSearch, ExhaustiveSearch},
        config::{Cents, DF, MaxPctChange},
        domain::{PriceSeries, Window},
        error::{Result, SearchError},
        utils::timed,
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
    strum_macros::{Display, EnumIter, EnumString},
};

/// Which algorithm answers the search. All of them return a window of the
/// same length; only the pick among equal-length windows differs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchStrategy {
    Exhaustive,
    #[default]
    DivideAndConquer,
    Parallel,
}

impl SearchStrategy {
    pub fn run(self, series: &PriceSeries, max_pct_change: MaxPctChange) -> Result<Window> {
        timed(self, Duration::from_millis(50), || match self {
            Self::Exhaustive => ExhaustiveSearch::find(series, max_pct_change),
            Self::DivideAndConquer => DivideAndConquerSearch::find(series, max_pct_change),
            Self::Parallel => DivideAndConquerSearch::find_parallel(series, max_pct_change),
        })
    }
}

/// Validates the raw inputs and runs `strategy` over them.
///
/// The threshold is checked first, then emptiness, then every price.
pub fn find_longest_lateral_trend(
    prices: &[Cents],
    max_pct_change: f64,
    strategy: SearchStrategy,
) -> Result<Window> {
    let max_pct_change = MaxPctChange::new(max_pct_change)?;
    if prices.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    let series = PriceSeries::new(prices.to_vec())?;

    if DF.log_search {
        log::info!(
            "Searching {} prices for the longest lateral trend within {} ({})",
            series.len(),
            max_pct_change,
            strategy
        );
    }
    strategy.run(&series, max_pct_change)
}

#[cfg(test)]
mod tests {
    use {super::*, std::str::FromStr, strum::IntoEnumIterator};

    #[test]
    fn test_strategy_names() {
        assert_eq!(SearchStrategy::DivideAndConquer.to_string(), "divide-and-conquer");
        assert_eq!(
            SearchStrategy::from_str("exhaustive"),
            Ok(SearchStrategy::Exhaustive)
        );
        assert_eq!(SearchStrategy::default(), SearchStrategy::DivideAndConquer);
    }

    #[test]
    fn test_threshold_checked_before_input() {
        assert_eq!(
            find_longest_lateral_trend(&[], -1.0, SearchStrategy::Exhaustive),
            Err(SearchError::InvalidThreshold { value: -1.0 })
        );
    }

    #[test]
    fn test_empty_input_for_every_strategy() {
        for strategy in SearchStrategy::iter() {
            assert_eq!(
                find_longest_lateral_trend(&[], 5.0, strategy),
                Err(SearchError::EmptyInput)
            );
        }
    }

    #[test]
    fn test_non_positive_price_rejected() {
        assert_eq!(
            find_longest_lateral_trend(&[100, 101, -3], 5.0, SearchStrategy::DivideAndConquer),
            Err(SearchError::NonPositivePrice { index: 2, price: -3 })
        );
    }

    #[test]
    fn test_strategies_agree_on_length() {
        let prices = [1_000, 1_010, 990, 1_200, 1_190, 1_185, 1_199, 1_180, 900, 905];
        let lengths: Vec<usize> = SearchStrategy::iter()
            .map(|s| find_longest_lateral_trend(&prices, 2.0, s).unwrap().len())
            .collect();
        assert_eq!(lengths, vec![5, 5, 5]);
    }
}
