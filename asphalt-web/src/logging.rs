use std::{
    io::{self, Write},
    sync::OnceLock,
};

use anyhow::Result;
use tracing::{Event, Level, Metadata, Subscriber, debug, error, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// Level, source location and fields. No timestamp: the console stamps
/// entries itself and `SystemTime` is unavailable on `wasm32-unknown-unknown`.
struct ConsoleFmt;

impl<S, N> FormatEvent<S, N> for ConsoleFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{:>5} ", meta.level())?;

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Console writer ---

/// A MakeWriter that hands each formatted event to the console method
/// matching its level.
#[derive(Clone, Copy, Default)]
struct ConsoleWriter;

/// Buffers one event; the line is emitted when the writer is dropped.
struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl Write for ConsoleLine {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if !line.is_empty() {
            emit(self.level, line);
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(
        &'a self,
        meta: &Metadata<'_>,
    ) -> Self::Writer {
        ConsoleLine {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(
    level: Level,
    line: &str,
) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG => console::log_1(&value),
        Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(
    _level: Level,
    line: &str,
) {
    eprintln!("{line}");
}

// --- Statics ---

type SetStrFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetStrFn> = OnceLock::new();

const FALLBACK_FILTER: &str = "info";

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |level_str: &str| {
        let filter = EnvFilter::try_new(level_str)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level_str}': {e}"))?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

// --- Public API ---

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive. Case-insensitive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(f) => f(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Initializes logging. Call once at startup.
///
/// `directive` seeds the level filter; an invalid directive falls back to
/// INFO and is reported once logging is up.
pub fn init_logging(directive: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    };
    let (level_filter, level_handle) = reload::Layer::new(filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(ConsoleFmt)
        .with_ansi(false)
        .with_writer(ConsoleWriter);

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .try_init()
        .is_ok()
    {
        store_level_handle(level_handle);
    }

    if let Some(error) = rejected {
        warn!(directive, %error, "invalid log level, using {FALLBACK_FILTER}");
    }
}

/// Logs the result of mounting a page component.
///
/// `Ok(false)` means the component's anchors are not on this page, which is
/// expected on most pages and only logged at debug level.
pub fn log_mount_result(
    component: &'static str,
    result: Result<bool>,
) {
    match result {
        Ok(true) => {}
        Ok(false) => debug!(component, "anchors not present, component skipped"),
        Err(error) => error!(component, ?error, "component failed to mount"),
    }
}
