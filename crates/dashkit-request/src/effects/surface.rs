/// A busy indicator with a start/stop lifecycle.
///
/// The animation starts on [`spin`](Indicator::spin) and ends exactly
/// once, when the indicator is consumed by [`stop`](Indicator::stop);
/// taking `self` by value makes a second stop unrepresentable.
pub trait Indicator {
    /// Start the animation.
    fn spin(&self);
    /// End the animation and release the widget.
    fn stop(self);
}

/// The UI tree requests mount busy indicators into.
///
/// A surface resolves selector strings to region handles and renders
/// indicator widgets inside them. The request helper only consumes this
/// seam; terminal rendering lives in `dashkit-ui`.
pub trait Surface {
    /// Handle for a resolved set of regions. Handed to the success
    /// continuation so callers can render results into the same spot.
    type Region: Send + 'static;
    /// Concrete indicator widget this surface renders.
    type Indicator: Indicator + Send;

    /// Resolve a selector to its matching regions. An unknown selector
    /// resolves to an empty region set, not an error.
    fn select(&self, selector: &str) -> Self::Region;

    /// Create an indicator and append it to every region in the set. An
    /// empty set still yields a (detached) indicator.
    fn mount(&self, region: &Self::Region) -> Self::Indicator;
}

impl<S: Surface> Surface for &S {
    type Region = S::Region;
    type Indicator = S::Indicator;

    fn select(&self, selector: &str) -> Self::Region {
        (**self).select(selector)
    }

    fn mount(&self, region: &Self::Region) -> Self::Indicator {
        (**self).mount(region)
    }
}

/// Surface for headless callers: selectors resolve to nothing and
/// indicators are inert.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

/// Indicator that animates nothing.
#[derive(Debug)]
pub struct NullIndicator;

impl Indicator for NullIndicator {
    fn spin(&self) {}
    fn stop(self) {}
}

impl Surface for NullSurface {
    type Region = ();
    type Indicator = NullIndicator;

    fn select(&self, _selector: &str) -> Self::Region {}

    fn mount(&self, _region: &Self::Region) -> Self::Indicator {
        NullIndicator
    }
}
