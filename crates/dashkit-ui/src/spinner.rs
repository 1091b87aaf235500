use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

use dashkit_request::Indicator;

const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>12.cyan.bold} {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const TICK_INTERVAL: Duration = Duration::from_millis(80);

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    ProgressStyle::with_template(SPINNER_STYLE)
        .ok()
        .map(|style| style.tick_chars(TICK))
});

/// Busy indicator occupying a set of board regions.
///
/// One spinner bar is drawn per matched region, prefixed with the
/// region name. An empty region set yields a detached spinner that
/// animates nothing but still follows the start/stop lifecycle.
pub struct Spinner {
    bars: Vec<ProgressBar>,
}

impl Spinner {
    pub(crate) fn mounted(multi: &MultiProgress, regions: &[String]) -> Self {
        let bars = regions
            .iter()
            .map(|region| {
                let bar = ProgressBar::new_spinner();
                let bar = match SPINNER_TEMPLATE.as_ref() {
                    Some(style) => bar.with_style(style.clone()),
                    None => bar,
                };
                bar.set_prefix(region.clone());
                multi.add(bar)
            })
            .collect();
        Self { bars }
    }

    #[cfg(test)]
    pub(crate) fn bars(&self) -> &[ProgressBar] {
        &self.bars
    }
}

impl Indicator for Spinner {
    fn spin(&self) {
        for bar in &self.bars {
            bar.enable_steady_tick(TICK_INTERVAL);
        }
    }

    fn stop(self) {
        for bar in self.bars {
            bar.finish_and_clear();
        }
    }
}
