use std::env;

use anyhow::{anyhow, Context, Result};
use log::info;

use modelview::gfx::scene::{auto_center_and_scale, load_obj, SceneGraph};
use modelview::viewer::{EnvironmentMap, ViewerState};

const USAGE: &str = "Usage: modelview <model.obj> [--metalness X] [--roughness Y] [--env NAME] [--normalize SIZE]";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse(env::args().skip(1))?;

    let mut model =
        load_obj(&options.path).with_context(|| format!("failed to load {}", options.path))?;
    if let Some(size) = options.normalize {
        let normalization = auto_center_and_scale(&mut model, size);
        println!(
            "Normalized: translation {:?}, scale {:.4}",
            normalization.translation, normalization.scale
        );
    }

    let bounds = model.world_bounds();
    println!(
        "Bounds: min {:?} max {:?} (size {:?})",
        bounds.min,
        bounds.max,
        bounds.size()
    );

    let mut viewer = ViewerState::new();
    let fit = viewer.load_model(model);
    if fit.degenerate {
        info!("Model has no extent, framed with the default size");
    }

    if let Some(name) = &options.environment {
        viewer.set_environment(Some(EnvironmentMap::new(name)));
    }
    viewer.set_metalness(options.metalness);
    // Propagation is idempotent, so the last pass reports on every material
    let report = viewer.set_roughness(options.roughness);

    println!("Camera position: {:?}", fit.pose.position);
    println!("Camera target:   {:?}", fit.pose.target);
    println!("Clip planes:     {:.4} .. {:.4}", fit.pose.near, fit.pose.far);
    println!(
        "Orbit distance:  {:.4} .. {:.4}",
        fit.limits.min_distance, fit.limits.max_distance
    );
    println!(
        "Materials:       {} updated, {} skipped",
        report.applied, report.skipped
    );
    Ok(())
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    path: String,
    metalness: f32,
    roughness: f32,
    environment: Option<String>,
    normalize: Option<f32>,
}

impl CliOptions {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let Some(path) = args.next() else {
            return Err(anyhow!(USAGE));
        };
        let mut options = Self {
            path,
            metalness: 0.0,
            roughness: 0.5,
            environment: None,
            normalize: None,
        };

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("Missing value for {flag}. {USAGE}"))
            };
            match arg.as_str() {
                "--metalness" => options.metalness = parse_number(&value("--metalness")?)?,
                "--roughness" => options.roughness = parse_number(&value("--roughness")?)?,
                "--env" => options.environment = Some(value("--env")?),
                "--normalize" => options.normalize = Some(parse_size(&value("--normalize")?)?),
                other => return Err(anyhow!("Unknown argument: {other}. {USAGE}")),
            }
        }
        Ok(options)
    }
}

fn parse_number(text: &str) -> Result<f32> {
    text.parse::<f32>()
        .with_context(|| format!("expected a number, got '{text}'"))
}

fn parse_size(text: &str) -> Result<f32> {
    let size = parse_number(text)?;
    if !(size.is_finite() && size > 0.0) {
        return Err(anyhow!("normalize size must be positive, got '{text}'"));
    }
    Ok(size)
}
