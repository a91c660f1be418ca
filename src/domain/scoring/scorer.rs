//! Opportunity score and investment rating
//!
//! Both formulas weight three factors and report the result on a 0-100 scale
//! rounded to one decimal, so equal inputs always produce equal outputs.

use crate::shared::utils::{clamp_unit, round_to_tenth};

const PROFIT_WEIGHT: f64 = 0.6;
const VOLATILITY_WEIGHT: f64 = 0.2;
const LIQUIDITY_WEIGHT: f64 = 0.2;

const PRICE_WEIGHT: f64 = 0.3;
const CHANGE_WEIGHT: f64 = 0.5;
const VOLUME_WEIGHT: f64 = 0.2;

/// Trade volume at which the liquidity factor saturates
const VOLUME_SATURATION: f64 = 200.0;
/// Prices at or below this get the full price factor
const PRICE_SWEET_SPOT: f64 = 50.0;

/// Stateless scorer shared by all detectors
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    /// Score of a trading opportunity from profit ratio, volatility and volume
    pub fn opportunity_score(profit_ratio: f64, volatility: f64, volume: u64) -> f64 {
        let profit = clamp_unit(profit_ratio);
        let volatility = clamp_unit(volatility * 5.0);
        let liquidity = clamp_unit(volume as f64 / VOLUME_SATURATION);

        round_to_tenth(
            (PROFIT_WEIGHT * profit + VOLATILITY_WEIGHT * volatility + LIQUIDITY_WEIGHT * liquidity) * 100.0,
        )
    }

    /// Rating of an item as a buy-and-hold; cheaper, rising, liquid items rate higher
    pub fn investment_rating(price: f64, price_change_pct: f64, volume: u64) -> f64 {
        let price_factor = clamp_unit(PRICE_SWEET_SPOT / price.max(1.0));
        // 0.5 is a flat price; left unbounded so strong risers keep their order
        let change_factor = price_change_pct / 100.0 + 0.5;
        let volume_factor = clamp_unit(volume as f64 / VOLUME_SATURATION);

        let rating = (PRICE_WEIGHT * price_factor + CHANGE_WEIGHT * change_factor + VOLUME_WEIGHT * volume_factor) * 100.0;
        round_to_tenth(rating.clamp(0.0, 100.0))
    }
}
