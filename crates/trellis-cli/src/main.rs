//! Trellis CLI - check and evaluate stack scene manifests.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::disallowed_methods,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::doc_markdown
)]

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trellis_layout::Rect;
use trellis_yaml::{Manifest, ParseError, Scene, SceneReport};

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Stack layout directives and scene manifests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check scene manifest validity
    Check {
        /// Path to manifest file (default: bundled stack scenes)
        manifest: Option<PathBuf>,
    },

    /// List the scenes of a manifest
    Scenes {
        /// Path to manifest file (default: bundled stack scenes)
        manifest: Option<PathBuf>,
    },

    /// Resolve and place the items of one or all scenes
    Layout {
        /// Path to manifest file (default: bundled stack scenes)
        manifest: Option<PathBuf>,

        /// Only evaluate this scene
        #[arg(short, long)]
        scene: Option<String>,

        /// Output format (text, json, css)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest } => {
            check_manifest(manifest.as_ref());
        }
        Commands::Scenes { manifest } => {
            list_scenes(manifest.as_ref());
        }
        Commands::Layout {
            manifest,
            scene,
            format,
        } => {
            layout_scenes(manifest.as_ref(), scene.as_deref(), &format);
        }
    }
}

fn load_manifest(path: Option<&PathBuf>) -> Manifest {
    let result = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading manifest");
            let content = match fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read manifest: {}", e);
                    std::process::exit(1);
                }
            };
            Manifest::from_yaml(&content)
        }
        None => Manifest::bundled(),
    };

    match result {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Manifest invalid: {}", e);
            std::process::exit(1);
        }
    }
}

fn check_manifest(path: Option<&PathBuf>) {
    let manifest = load_manifest(path);
    println!("Manifest valid!");
    println!("  Name: {}", manifest.name);
    println!("  Version: {}", manifest.trellis);
    println!("  Scenes: {}", manifest.scenes.len());
    let items: usize = manifest.scenes.iter().map(|s| s.items.len()).sum();
    println!("  Items: {}", items);
}

fn list_scenes(path: Option<&PathBuf>) {
    let manifest = load_manifest(path);
    for scene in &manifest.scenes {
        println!("{}", scene_summary(scene));
    }
}

fn layout_scenes(path: Option<&PathBuf>, scene_id: Option<&str>, format: &str) {
    let manifest = load_manifest(path);

    let reports = match evaluate(&manifest, scene_id) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Layout failed: {}", e);
            std::process::exit(1);
        }
    };

    match render(&reports, format) {
        Ok(output) => print!("{output}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn evaluate(manifest: &Manifest, scene_id: Option<&str>) -> Result<Vec<SceneReport>, ParseError> {
    match scene_id {
        Some(id) => Ok(vec![manifest.scene(id)?.evaluate()?]),
        None => manifest.scenes.iter().map(Scene::evaluate).collect(),
    }
}

fn render(reports: &[SceneReport], format: &str) -> Result<String, String> {
    match format {
        "text" => Ok(render_text(reports)),
        "json" => serde_json::to_string_pretty(reports)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("Failed to encode JSON: {}", e)),
        "css" => Ok(render_css(reports)),
        other => Err(format!(
            "Unknown format '{}': expected text, json or css",
            other
        )),
    }
}

fn scene_summary(scene: &Scene) -> String {
    let title = scene.title.as_deref().unwrap_or("");
    format!(
        "{:<16} {:>5}x{:<5} {} items  {}",
        scene.id,
        scene.container.width,
        scene.container.height,
        scene.items.len(),
        title
    )
    .trim_end()
    .to_string()
}

fn format_rect(rect: &Rect) -> String {
    format!(
        "x={:<7} y={:<7} w={:<7} h={}",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn render_text(reports: &[SceneReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let container = &report.layout.container;
        out.push_str(&format!(
            "{} ({}, justify {}, align {}, gap {})\n",
            report.id,
            container.direction.as_css(),
            container.justify.as_css(),
            container.align.as_css(),
            container.gap
        ));
        for (index, rect) in report.rects.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", index, format_rect(rect)));
        }
    }
    out
}

fn render_css(reports: &[SceneReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(".{} {{ {} }}\n", report.id, report.css.container));
        for (index, item) in report.css.items.iter().enumerate() {
            out.push_str(&format!(
                ".{} > :nth-child({}) {{ {} }}\n",
                report.id,
                index + 1,
                item
            ));
        }
    }
    out
}
