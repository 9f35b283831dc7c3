use clap::Parser;
use link_scope::LinkScope;
use link_scope::recommend::recommend_or_fallback;
use link_scope::results::ComparisonChartData;
use link_scope::server::types::PlanResponse;
use std::error::Error;

mod args;
use args::{Args, Command};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(args).await {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut scope = LinkScope::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path.display());
        scope = scope.with_config_file(path)?;
    }
    if let Some(profile) = args.profile {
        scope = scope.with_profile(profile.into());
    }
    if let Some(timeout) = args.timeout {
        scope = scope.with_timeout(timeout);
    }

    match args.command {
        Command::Serve { listen } => {
            // An explicit flag wins, then the PORT environment variable
            if let Some(addr) = listen {
                scope = scope.with_listen_addr(addr);
            } else if let Ok(port) = std::env::var("PORT") {
                if !port.is_empty() {
                    scope = scope.with_listen_addr(format!("0.0.0.0:{}", port));
                }
            }
            scope.server()?.run().await?;
        }
        Command::Analyze { url } => {
            let analysis = scope.analyzer()?.analyze(&url).await?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Compare {
            user_url,
            competitor_url,
        } => {
            let analyzer = scope.analyzer()?;
            let (user_analysis, competitor_analysis) =
                analyzer.analyze_pair(&user_url, &competitor_url).await?;
            let recommender = scope.recommender();
            let ai_plan =
                recommend_or_fallback(recommender.as_ref(), &user_analysis, &competitor_analysis)
                    .await;

            let response = PlanResponse {
                chart_data: ComparisonChartData::from_analyses(
                    &user_analysis,
                    &competitor_analysis,
                ),
                user_analysis,
                competitor_analysis,
                raw_plan: ai_plan.clone(),
                ai_plan,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
