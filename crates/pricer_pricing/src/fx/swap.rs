//! Discounting pricer for FX swaps.

use pricer_core::sensitivity::PointSensitivities;
use pricer_core::traits::RatesProvider;
use pricer_core::types::{MultiCurrencyAmount, PricingError};
use pricer_models::instruments::FxSwap;
use tracing::debug;

use super::single::{spread_of, DiscountingFxSingleProductPricer};

/// Prices an [`FxSwap`] as the sum of its two legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountingFxSwapProductPricer {
    leg_pricer: DiscountingFxSingleProductPricer,
}

impl DiscountingFxSwapProductPricer {
    /// Default pricer instance.
    pub const DEFAULT: Self = Self::new(DiscountingFxSingleProductPricer::DEFAULT);

    /// Creates a swap pricer that values each leg with `leg_pricer`.
    pub const fn new(leg_pricer: DiscountingFxSingleProductPricer) -> Self {
        Self { leg_pricer }
    }

    /// Present value of the near leg combined with the far leg.
    pub fn present_value<P>(
        &self,
        swap: &FxSwap,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        debug!(
            pair = %swap.currency_pair(),
            near = %swap.near_leg().payment_date(),
            far = %swap.far_leg().payment_date(),
            "FX swap present value"
        );
        let near = self.leg_pricer.present_value(swap.near_leg(), provider)?;
        let far = self.leg_pricer.present_value(swap.far_leg(), provider)?;
        Ok(near.combined_with(&far))
    }

    /// Currency exposure, equal to the present value.
    pub fn currency_exposure<P>(
        &self,
        swap: &FxSwap,
        provider: &P,
    ) -> Result<MultiCurrencyAmount, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        self.present_value(swap, provider)
    }

    /// Point sensitivities of both legs, near leg first, not merged.
    pub fn present_value_sensitivity<P>(
        &self,
        swap: &FxSwap,
        provider: &P,
    ) -> Result<PointSensitivities, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let near = self
            .leg_pricer
            .present_value_sensitivity(swap.near_leg(), provider)?;
        let far = self
            .leg_pricer
            .present_value_sensitivity(swap.far_leg(), provider)?;
        Ok(near.combined_with(&far))
    }

    /// Spread to add to the far leg rate so that the swap present value is
    /// zero.
    ///
    /// # Errors
    ///
    /// - `PricingError::Undefined` for a zero counter discount factor at the
    ///   far date
    /// - Missing market data from the provider
    pub fn par_spread<P>(&self, swap: &FxSwap, provider: &P) -> Result<f64, PricingError>
    where
        P: RatesProvider + ?Sized,
    {
        let far = swap.far_leg();
        let counter = far.counter_currency_amount().currency();
        let pv = self.present_value(swap, provider)?;
        let pv_counter = pv.converted_to(counter, provider)?;
        let df_counter = provider.discount_factor(counter, far.payment_date())?;
        spread_of(pv_counter, far.base_currency_amount(), df_counter)
    }
}
