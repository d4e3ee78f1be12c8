#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use eb_score_engine::{ChallengeBrief, ScorerConfig, SubmissionScorer};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(repo_url), Some(title), Some(description)) = (args.next(), args.next(), args.next())
    else {
        eprintln!("usage: eb-score <repo-url> <challenge-title> <challenge-description>");
        return ExitCode::from(2);
    };

    let scorer = match SubmissionScorer::new(&ScorerConfig::from_env()) {
        Ok(scorer) => scorer,
        Err(err) => {
            eprintln!("failed to build scorer: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    let challenge = ChallengeBrief::new(title, description);
    let result = runtime.block_on(scorer.score_submission(&repo_url, &challenge));

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to render result: {err}");
            return ExitCode::FAILURE;
        }
    }

    if result.is_scored() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
