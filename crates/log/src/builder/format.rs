//! Format layer construction.

use tracing_subscriber::{Layer, Registry};

/// Type-erased format layer; each [`Format`](crate::Format) produces a
/// different concrete type.
pub(super) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Applies [`DisplayConfig`](crate::DisplayConfig) to a `fmt` layer, routes it
/// to stderr and boxes it.
macro_rules! fmt_layer {
    ($layer:expr, $display:expr) => {{
        use tracing_subscriber::Layer as _;

        let display: &$crate::DisplayConfig = $display;
        let layer = $layer
            .with_writer(std::io::stderr)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids);

        let boxed: $crate::builder::format::BoxedLayer = if display.time {
            layer.boxed()
        } else {
            layer.without_time().boxed()
        };
        boxed
    }};
}
