use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use aggir_screen::config::AppConfig;
use aggir_screen::error::AppError;
use aggir_screen::evaluation::{
    advise, assessment_router, score, AdviceReport, AssessmentService, AssessmentSubmission,
    InMemoryRepository, IntakeGuard, LogReferralPublisher, TipSection,
};
use aggir_screen::telemetry;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "GIR Screening Service",
    about = "Run the autonomy screening service or evaluate a questionnaire from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a completed questionnaire file and print the result
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// JSON file holding the collected answers (core and supplementary)
    #[arg(long)]
    answers: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let repository = Arc::new(InMemoryRepository::default());
    let referrals = Arc::new(LogReferralPublisher);
    let service = Arc::new(AssessmentService::new(repository, referrals));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(assessment_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "autonomy screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = std::fs::read(&args.answers)?;
    let submission: AssessmentSubmission = serde_json::from_slice(&raw)?;

    let profile = IntakeGuard.profile_from_submission(submission)?;
    let gir = score(&profile.answers.core)?;
    let advice = advise(&profile.answers);

    render_assessment(gir.rank(), gir.description(), gir.support_pathway(), &advice);
    Ok(())
}

fn render_assessment(rank: u8, description: &str, next_step: &str, advice: &AdviceReport) {
    println!("GIR screening (indicative)");
    println!("Estimated GIR: {rank} - {description}");
    println!("Next step: {next_step}");

    println!("\nAttention points");
    if advice.attention_flags.is_empty() {
        println!("- none");
    } else {
        for flag in &advice.attention_flags {
            println!("- {}: {}", flag.item.display_name(), flag.label);
        }
    }

    println!("\nTargeted prevention advice");
    render_tip_section(&advice.core_tips);

    println!("\nLifestyle priorities");
    render_tip_section(&advice.supplementary_tips);
}

fn render_tip_section(section: &TipSection) {
    match section {
        TipSection::Findings { tips } => {
            for tip in tips {
                println!("- {}: {}", tip.item, tip.text);
            }
        }
        TipSection::AllClear { message } => println!("{message}"),
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
