use std::fs;
use std::path::PathBuf;

use feature_atlas::api::{DataSource, ExplorerConfig, ScatterExplorer, try_load_dataset};
use feature_atlas::core::CategoryId;
use feature_atlas::interaction::ExplorerEvent;
use feature_atlas::render::NullRenderer;
use feature_atlas::telemetry::init_default_tracing;

const USAGE: &str = "usage: atlas_frame_dump --input <path|url> [--config <path>] [--category <id>] [--select <position>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: DataSource,
    config: Option<PathBuf>,
    category: Option<CategoryId>,
    select: Option<usize>,
    output: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ExplorerConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ExplorerConfig::default(),
    };
    config.data_source = args.input.clone();

    let dataset = try_load_dataset(&config.data_source, config.wrap_width)
        .await
        .map_err(|err| err.to_string())?;
    for rejection in &dataset.rejections {
        eprintln!("skipped record `{}`: {:?}", rejection.key, rejection.reason);
    }

    let mut explorer =
        ScatterExplorer::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    explorer.set_points(dataset.points);

    if let Some(category) = args.category {
        if !explorer.catalog().contains(category) {
            eprintln!("category {category} is not in the catalog; nothing will be highlighted");
        }
        explorer.dispatch(ExplorerEvent::CategorySelected(Some(category)));
    }
    if let Some(position) = args.select {
        // Offline dumps have no renderer warm-up to wait for.
        explorer.dispatch(ExplorerEvent::WarmupElapsed);
        explorer.dispatch(ExplorerEvent::PointClicked(Some(position)));
        if explorer.state().selected_point().is_none() {
            return Err(format!(
                "position {position} is out of range ({} points)",
                explorer.points().len()
            ));
        }
    }

    let json = explorer
        .view_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<DataSource>;
    let mut config = None::<PathBuf>;
    let mut category = None::<CategoryId>;
    let mut select = None::<usize>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(DataSource::parse(&value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--category" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --category".to_owned())?;
                category = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --category `{value}`: {err}"))?,
                );
            }
            "--select" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --select".to_owned())?;
                select = Some(
                    value
                        .parse()
                        .map_err(|err| format!("invalid --select `{value}`: {err}"))?,
                );
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        config,
        category,
        select,
        output,
    })
}
