//! Frame Engine CLI
//!
//! Scores one intake session and prints the resulting metrics as JSON.
//!
//! Usage: frame_engine [SESSION_JSON] [--external-score N]
//! The session is read from stdin when no path is given.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frame_engine::{EngineConfig, FrameEngine, IntakeSession, SpecState};

// ──────────────────────────────────────────────────────────────────────────────
// ARGUMENTS
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct CliArgs {
    session_path: Option<PathBuf>,
    external_score: Option<u8>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--external-score" => {
                let raw = args.next().context("--external-score needs a value")?;
                let score: u8 = raw
                    .parse()
                    .with_context(|| format!("invalid external score '{}'", raw))?;
                if score > 100 {
                    bail!("external score must be within 0-100, got {}", score);
                }
                parsed.external_score = Some(score);
            }
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            path => parsed.session_path = Some(PathBuf::from(path)),
        }
    }
    Ok(parsed)
}

async fn read_session(path: Option<&PathBuf>) -> Result<IntakeSession> {
    let raw = match path {
        Some(p) => tokio::fs::read_to_string(p)
            .await
            .with_context(|| format!("failed to read session file {:?}", p))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read session from stdin")?;
            buf
        }
    };
    parse_session(&raw)
}

fn parse_session(raw: &str) -> Result<IntakeSession> {
    let session: IntakeSession =
        serde_json::from_str(raw).map_err(frame_engine::FrameError::from)?;
    Ok(session)
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = EngineConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let spec = SpecState::load(config.spec_path.as_deref()).await;
    let engine = FrameEngine::new(spec);

    let session = read_session(args.session_path.as_ref()).await?;
    info!("Scoring session with {} answers", session.answers.len());

    let mut metrics = engine.compute(&session);
    if let Some(external) = args.external_score {
        metrics = metrics.merge_external_score(external);
    }

    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(args(&["session.json", "--external-score", "72"])).unwrap();
        assert_eq!(parsed.session_path, Some(PathBuf::from("session.json")));
        assert_eq!(parsed.external_score, Some(72));

        let empty = parse_args(args(&[])).unwrap();
        assert!(empty.session_path.is_none());
        assert!(empty.external_score.is_none());
    }

    #[test]
    fn test_parse_args_rejects_bad_scores() {
        assert!(parse_args(args(&["--external-score", "140"])).is_err());
        assert!(parse_args(args(&["--external-score", "high"])).is_err());
        assert!(parse_args(args(&["--external-score"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }

    #[tokio::test]
    async fn test_read_session_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(
            &path,
            r#"{"answers": [{"id": "a1", "question": "why_now", "text": "We need to grow."}], "self_rating": "7"}"#,
        )
        .await
        .unwrap();

        let session = read_session(Some(&path)).await.unwrap();
        assert_eq!(session.answers.len(), 1);
        assert_eq!(session.answers[0].id, "a1");
        assert!(parse_session("not json").is_err());
    }
}
