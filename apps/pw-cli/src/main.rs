use clap::{Args, Parser, Subcommand};
use pw_app::{AppError, AppResult, PlotCatalog};
use pw_core::OutputLayout;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pw-cli")]
#[command(about = "PlotWell CLI - simulation output plot assembly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LayoutArgs {
    /// Path to a layout YAML file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Root directory holding per-model output
    #[arg(long)]
    models_dir: Option<PathBuf>,
    /// Directory listing available protocols
    #[arg(long)]
    protocols_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List computed models and available protocols
    Menu {
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Assemble default plots for models under one protocol
    Plots {
        /// Models to include, in order
        #[arg(required = true)]
        models: Vec<String>,
        /// Protocol name
        #[arg(long)]
        protocol: String,
        /// Emit the result set as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Export one plot's series as CSV
    Export {
        /// Model name
        model: String,
        /// Protocol name
        #[arg(long)]
        protocol: String,
        /// Plot name from the default-plots manifest
        #[arg(long)]
        plot: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Menu { layout } => cmd_menu(&resolve_layout(&layout)?),
        Commands::Plots {
            models,
            protocol,
            json,
            output,
            layout,
        } => cmd_plots(
            &resolve_layout(&layout)?,
            &models,
            &protocol,
            json,
            output.as_deref(),
        ),
        Commands::Export {
            model,
            protocol,
            plot,
            output,
            layout,
        } => cmd_export(
            &resolve_layout(&layout)?,
            &model,
            &protocol,
            &plot,
            output.as_deref(),
        ),
    }
}

/// Build the output layout from a YAML config file and/or directory
/// flags; flags win over the file.
fn resolve_layout(args: &LayoutArgs) -> AppResult<OutputLayout> {
    let mut layout = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str::<OutputLayout>(&content).map_err(|e| {
                AppError::InvalidRequest(format!(
                    "failed to parse layout config {}: {}",
                    path.display(),
                    e
                ))
            })?
        }
        None => {
            let models_dir = args.models_dir.clone().ok_or_else(|| {
                AppError::InvalidRequest("--models-dir is required without --config".to_string())
            })?;
            let protocols_dir = args.protocols_dir.clone().ok_or_else(|| {
                AppError::InvalidRequest(
                    "--protocols-dir is required without --config".to_string(),
                )
            })?;
            OutputLayout::new(models_dir, protocols_dir)
        }
    };

    if let Some(models_dir) = &args.models_dir {
        layout.models_dir = models_dir.clone();
    }
    if let Some(protocols_dir) = &args.protocols_dir {
        layout.protocols_dir = protocols_dir.clone();
    }

    tracing::debug!(
        models_dir = %layout.models_dir.display(),
        protocols_dir = %layout.protocols_dir.display(),
        "resolved output layout"
    );
    Ok(layout)
}

fn cmd_menu(layout: &OutputLayout) -> AppResult<()> {
    let catalog = PlotCatalog::new(layout.clone());
    let menu = catalog.menu()?;

    if menu.models.is_empty() {
        println!("No computed models found");
    } else {
        println!("Models:");
        for model in &menu.models {
            println!("  {}", model);
        }
    }

    if menu.protocols.is_empty() {
        println!("No protocols found");
    } else {
        println!("Protocols:");
        for protocol in &menu.protocols {
            println!("  {}", protocol);
        }
    }
    Ok(())
}

fn cmd_plots(
    layout: &OutputLayout,
    models: &[String],
    protocol: &str,
    json: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = PlotCatalog::new(layout.clone());
    let results = catalog.load_plots(models, protocol)?;

    if json {
        let rendered = serde_json::to_string_pretty(&results)
            .map_err(|e| AppError::Extract(format!("failed to serialize result set: {}", e)))?;
        match output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                println!("✓ Wrote {} plots to {}", results.len(), path.display());
            }
            None => println!("{}", rendered),
        }
        return Ok(());
    }

    println!("Plots for protocol '{}':", protocol);
    for plot in &results.plots {
        let point_count: usize = plot.series.iter().map(|s| s.points.len()).sum();
        println!(
            "  {} [{}] - {} series, {} points ({} vs {})",
            plot.name,
            plot.model,
            plot.series.len(),
            point_count,
            plot.y_axis_label,
            plot.x_axis_label
        );
    }
    Ok(())
}

fn cmd_export(
    layout: &OutputLayout,
    model: &str,
    protocol: &str,
    plot_name: &str,
    output: Option<&Path>,
) -> AppResult<()> {
    let catalog = PlotCatalog::new(layout.clone());
    let results = catalog.load_plots(&[model.to_string()], protocol)?;

    let plot = results
        .plots
        .iter()
        .find(|p| p.name == plot_name)
        .ok_or_else(|| {
            AppError::InvalidRequest(format!(
                "plot '{}' not found in default plots for model '{}'",
                plot_name, model
            ))
        })?;

    // Build CSV
    let mut csv = String::from("series,x,y\n");
    for series in &plot.series {
        for point in &series.points {
            csv.push_str(&format!("{},{},{}\n", series.label, point.x, point.y));
        }
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported '{}' to {}", plot_name, path.display());
    } else {
        print!("{}", csv);
    }

    Ok(())
}
