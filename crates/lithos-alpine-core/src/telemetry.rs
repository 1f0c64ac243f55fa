// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Helper invocation metrics, compiled to no-ops without the `telemetry`
//! feature.

#[cfg(feature = "telemetry")]
mod otel {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::OnceLock;

    use opentelemetry::global;
    use opentelemetry::metrics::Counter;
    use opentelemetry::KeyValue;

    const METER_NAME: &str = "lithos_alpine";

    static ENABLED: AtomicBool = AtomicBool::new(false);
    static HANDLES: OnceLock<Handles> = OnceLock::new();

    struct Handles {
        helper_counter: Counter<u64>,
        failure_counter: Counter<u64>,
    }

    impl Handles {
        fn new() -> Self {
            let meter = global::meter(METER_NAME);
            let helper_counter = meter
                .u64_counter("lithos.alpine.helper.count")
                .with_description("Number of Alpine helper invocations")
                .init();
            let failure_counter = meter
                .u64_counter("lithos.alpine.helper.failures")
                .with_description("Number of Alpine helper invocations that returned an error")
                .init();
            Self {
                helper_counter,
                failure_counter,
            }
        }
    }

    fn handles() -> &'static Handles {
        HANDLES.get_or_init(Handles::new)
    }

    pub fn enable() {
        ENABLED.store(true, Ordering::Relaxed);
    }

    pub fn disable() {
        ENABLED.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled() -> bool {
        ENABLED.load(Ordering::Relaxed)
    }

    pub fn record_helper_invocation(name: &str, engine: &'static str, success: bool) {
        if !is_enabled() {
            return;
        }
        let hs = handles();
        let attrs = [
            KeyValue::new("helper.name", name.to_string()),
            KeyValue::new("helper.engine", engine),
            KeyValue::new("helper.success", success),
        ];
        hs.helper_counter.add(1, &attrs);
        if !success {
            hs.failure_counter.add(1, &attrs);
        }
    }
}

#[cfg(not(feature = "telemetry"))]
mod otel {
    pub fn enable() {}
    pub fn disable() {}
    pub fn is_enabled() -> bool {
        false
    }
    pub fn record_helper_invocation(_name: &str, _engine: &'static str, _success: bool) {}
}

pub use otel::{disable, enable, is_enabled, record_helper_invocation};
