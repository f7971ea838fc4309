use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{debug, error};

use letthemcook::{render_document, ClientConfig, Language, PredictorBuilder, ResultFormatter};

/// Upload a food photo and print the predicted dish, calories, ingredients and recipe as HTML
#[derive(Parser, Debug)]
#[command(name = "letthemcook", version, about)]
struct Cli {
    /// Image to classify (jpg, jpeg or png)
    image: PathBuf,

    /// Prediction endpoint, overrides the configured one
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Label language: id or en
    #[arg(long)]
    language: Option<Language>,

    /// Wrap the result in a complete HTML page
    #[arg(long)]
    standalone: bool,

    /// Print the validated prediction as JSON instead of HTML
    #[arg(long, conflicts_with = "standalone")]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match ClientConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("{:?}", config);

    let language = cli.language.unwrap_or(config.language);
    let formatter = ResultFormatter::new(language);

    let mut builder = PredictorBuilder::from_config(&config)
        .image(cli.image.to_string_lossy());
    if let Some(endpoint) = cli.endpoint {
        builder = builder.endpoint(endpoint);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    let (body, succeeded) = match builder.predict().await {
        Ok(result) if cli.json => {
            match serde_json::to_string_pretty(&result) {
                Ok(json) => (json, result.is_success()),
                Err(e) => {
                    error!("Failed to serialize prediction: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Ok(result) => (
            page(&formatter.assemble_display(&result), cli.standalone),
            result.is_success(),
        ),
        Err(e) => {
            error!("{}", e);
            if cli.json {
                return ExitCode::FAILURE;
            }
            (page(&formatter.format_error(&e), cli.standalone), false)
        }
    };

    let written = match &cli.output {
        Some(path) => std::fs::write(path, body + "\n"),
        None => {
            println!("{}", body);
            Ok(())
        }
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn page(fragment: &letthemcook::Fragment, standalone: bool) -> String {
    if standalone {
        render_document(fragment, "Let Them Cook")
    } else {
        fragment.to_string()
    }
}
