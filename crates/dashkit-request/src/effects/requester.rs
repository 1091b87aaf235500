use crate::data::{Call, RequestOptions};
use crate::effects::http::Transport;
use crate::effects::surface::{Indicator, NullSurface, Surface};

/// Issues dashboard requests, surfacing a busy indicator while each
/// call is outstanding.
///
/// The helper owns neither retries nor deadlines; both belong to the
/// [`Transport`]. Completion is delivered through the continuations on
/// [`RequestOptions`], exactly one of which fires per call.
pub struct Requester<T: Transport, S: Surface = NullSurface> {
    transport: T,
    surface: S,
}

impl<T: Transport> Requester<T> {
    /// Requester with no UI surface; region selectors resolve to
    /// nothing.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            surface: NullSurface,
        }
    }
}

impl<T: Transport, S: Surface> Requester<T, S> {
    /// Requester mounting busy indicators on `surface`.
    pub fn with_surface(transport: T, surface: S) -> Self {
        Self { transport, surface }
    }

    /// Issue one request, fire-and-forget.
    ///
    /// When `options.region` is set, a busy indicator spins in every
    /// matched region until the transport completes, and is stopped
    /// exactly once on whichever completion path fires. The response
    /// payload goes to `on_success` together with the matched region
    /// handle; a failure is logged and goes to `on_error` as the
    /// transport's status description plus the underlying error. A
    /// missing continuation drops that outcome silently.
    pub async fn request(&self, url: &str, options: RequestOptions<S::Region>) {
        let RequestOptions {
            payload,
            method,
            content_type,
            region,
            on_success,
            on_error,
        } = options;

        let mounted = region.as_deref().map(|selector| {
            let region = self.surface.select(selector);
            let indicator = self.surface.mount(&region);
            indicator.spin();
            (indicator, region)
        });

        let call = Call {
            url,
            method,
            payload: payload.as_ref(),
            content_type: content_type.as_deref(),
        };

        match self.transport.dispatch(call).await {
            Ok(data) => {
                let region = mounted.map(|(indicator, region)| {
                    indicator.stop();
                    region
                });
                if let Some(on_success) = on_success {
                    on_success(data, region);
                }
            }
            Err(failure) => {
                if let Some((indicator, _)) = mounted {
                    indicator.stop();
                }
                tracing::error!(url, kind = %failure.kind, error = %failure.source, "request failed");
                if let Some(on_error) = on_error {
                    on_error(failure.kind, Box::new(failure.source));
                }
            }
        }
    }
}
