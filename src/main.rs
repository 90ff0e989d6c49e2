//! storefront-payments server entry point.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storefront_payments::adapters::events::TracingEventPublisher;
use storefront_payments::adapters::http::{build_app, PaymentAppState};
use storefront_payments::adapters::razorpay::{RazorpayConfig, RazorpayGateway};
use storefront_payments::config::{AppConfig, ConfigError, ServerConfig};
use storefront_payments::domain::payment::CheckoutSignatureVerifier;
use storefront_payments::ports::GatewayError;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("gateway client error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config.server);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        test_mode = config.payment.is_test_mode(),
        live_mode = config.payment.is_live_mode(),
        "Starting storefront-payments"
    );
    if config.is_production() && config.payment.is_test_mode() {
        tracing::warn!("Production environment is using Razorpay test keys");
    }
    if !config.is_production() && config.payment.is_live_mode() {
        tracing::warn!("Razorpay live keys are in use outside production");
    }

    // Wire adapters
    let gateway = RazorpayGateway::new(RazorpayConfig::from_payment_config(&config.payment))?;
    let verifier = CheckoutSignatureVerifier::new(config.payment.razorpay_key_secret.clone());
    let state = PaymentAppState::new(
        Arc::new(gateway),
        Arc::new(verifier),
        Arc::new(TracingEventPublisher::new()),
        config.payment.razorpay_key_id.clone(),
        config.payment.default_currency.to_ascii_uppercase(),
    );

    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` overrides
/// the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
