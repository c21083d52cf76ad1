use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const SAJU_TARGETS: [&str; 4] = ["saju_cli", "saju_chart", "saju_calendar", "saju_base"];

/// Filter directives setting `level` on the saju crates and `warn` elsewhere.
pub fn default_directives(level: &str) -> String {
    let mut out = String::from("warn");
    for target in SAJU_TARGETS {
        out.push(',');
        out.push_str(target);
        out.push('=');
        out.push_str(level);
    }
    out
}

/// Install the stderr subscriber. `RUST_LOG` overrides both `verbose` and
/// the configured level.
pub fn init_logger(verbose: bool, configured: Option<&str>) {
    let level = if verbose { "debug" } else { configured.unwrap_or("info") };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        let d = default_directives("debug");
        assert!(d.starts_with("warn,"));
        for t in SAJU_TARGETS {
            assert!(d.contains(&format!("{t}=debug")));
        }
        assert!(EnvFilter::try_new(&d).is_ok());
    }
}
