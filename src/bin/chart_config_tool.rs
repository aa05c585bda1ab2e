use dashchart::api::{AnalysisResponse, ChartHost, ChartHostConfig, DispatchMode, synthesize};
use dashchart::core::{ChartSeries, Viewport, resolve};
use dashchart::render::NullBackend;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: chart_config_tool <resolve|synthesize|analysis> --input <path> [--output <path>] [--showcase]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Resolve,
    Synthesize,
    Analysis,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
    mode: DispatchMode,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    upstream: String,
    resolved: Option<&'static str>,
    dispatch: String,
}

fn main() {
    // `false` without the telemetry feature; the tool runs silently then.
    let _tracing_installed = dashchart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let output = match args.command {
        CommandKind::Resolve => {
            let series = ChartSeries::from_json_str(&raw).map_err(|err| err.to_string())?;
            let report = resolve_report(&series, args.mode)?;
            serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?
        }
        CommandKind::Synthesize => {
            let series = ChartSeries::from_json_str(&raw).map_err(|err| err.to_string())?;
            let kind = resolve(&series.kind)
                .supported()
                .ok_or_else(|| format!("unsupported chart type `{}`", series.kind))?;
            synthesize(kind, &series)
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?
        }
        CommandKind::Analysis => {
            let response = AnalysisResponse::from_json_str(&raw).map_err(|err| err.to_string())?;
            let mut reports = Vec::new();
            for chart in response.charts() {
                reports.push(resolve_report(&chart.to_series(), args.mode)?);
            }
            serde_json::to_string_pretty(&reports).map_err(|err| err.to_string())?
        }
    };

    match &args.output {
        Some(path) => write_text(path, &output),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

fn resolve_report(series: &ChartSeries, mode: DispatchMode) -> Result<ResolveReport, String> {
    let config = ChartHostConfig::new(Viewport::new(800, 400)).with_mode(mode);
    let mut host = ChartHost::new(NullBackend::new(), config).map_err(|err| err.to_string())?;
    let outcome = host.present(series);
    Ok(ResolveReport {
        upstream: series.kind.clone(),
        resolved: resolve(&series.kind).supported().map(|kind| kind.as_str()),
        dispatch: format!("{outcome:?}"),
    })
}

fn write_text(path: &Path, text: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
        }
    }
    fs::write(path, text).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("resolve") => CommandKind::Resolve,
        Some("synthesize") => CommandKind::Synthesize,
        Some("analysis") => CommandKind::Analysis,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut mode = DispatchMode::Live;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--showcase" => mode = DispatchMode::Showcase,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output,
        mode,
    })
}
