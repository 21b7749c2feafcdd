//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 사용한다.

pub mod app;
pub mod config;
pub mod format;
pub mod forms;
pub mod hydrogen;
pub mod i18n;
pub mod ui_cli;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 구독자를 초기화한다. 기본 레벨은 warn, `RUST_LOG`로 조정한다.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // GUI/CLI 양쪽에서 한 번만 호출되도록 try_init 사용
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
