use crate::{
    config::Cents,
    error::{Result, SearchError},
};

/// An ordered, immutable run of closing prices that has passed input validation.
///
/// Every price is strictly positive, so `Window::percent_change` never divides by zero.
/// An empty series is allowed here; the search reports it as `EmptyInput`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceSeries {
    prices: Vec<Cents>,
}

impl PriceSeries {
    pub fn new(prices: Vec<Cents>) -> Result<Self> {
        if let Some((index, &price)) = prices.iter().enumerate().find(|(_, p)| **p <= 0) {
            return Err(SearchError::NonPositivePrice { index, price });
        }
        Ok(Self { prices })
    }

    pub fn as_slice(&self) -> &[Cents] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl TryFrom<Vec<Cents>> for PriceSeries {
    type Error = SearchError;

    fn try_from(prices: Vec<Cents>) -> Result<Self> {
        Self::new(prices)
    }
}

impl AsRef<[Cents]> for PriceSeries {
    fn as_ref(&self) -> &[Cents] {
        self.as_slice()
    }
}
