//! # Greenhouse BTU Calculator CLI
//!
//! Terminal front end for `btu_core`. Collects a greenhouse configuration,
//! runs the heat-loss estimate and prints the breakdown.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive prompts (press Enter to keep the [default])
//! btu
//!
//! # Read the configuration from a JSON file
//! btu --input house.json
//!
//! # Use a custom material catalog (TOML or JSON)
//! btu --catalog my_materials.toml
//!
//! # List the catalog entries
//! btu --list
//!
//! # Print the full result as JSON
//! btu --input house.json --json
//! ```
//!
//! Log output is controlled with `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;

use btu_core::{calculate, Catalog, CalcError, Dimensions, HeatLossInput, HeatLossResult, Shape, Temperature};

const USAGE: &str = "\
Usage: btu [--input <file.json>] [--catalog <file.toml|file.json>] [--list] [--json]

Options:
  --input <file>     Read the greenhouse configuration from a JSON file
  --catalog <file>   Use a custom material catalog instead of the built-in one
  --list             List catalog materials and exit
  --json             Print the result as JSON
  -h, --help         Show this help";

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    input: Option<PathBuf>,
    catalog: Option<PathBuf>,
    list: bool,
    json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                let path = iter.next().context("--input needs a file path")?;
                options.input = Some(PathBuf::from(path));
            }
            "--catalog" | "-c" => {
                let path = iter.next().context("--catalog needs a file path")?;
                options.catalog = Some(PathBuf::from(path));
            }
            "--list" => options.list = true,
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            other => bail!("unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(options)
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Option<String> {
    write!(output, "{}", prompt).ok()?;
    output.flush().ok()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

fn prompt_f64<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str, default: f64) -> f64 {
    let text = format!("{} [{}]: ", prompt, default);
    prompt_line(input, output, &text)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Prompt for a catalog key. Accepts the key itself or its 1-based number
/// in the listing; anything else keeps the default and prints a notice.
fn prompt_key<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    options: &[(&str, String)],
    default: &str,
) -> String {
    let _ = writeln!(output, "{}:", prompt);
    for (i, (key, label)) in options.iter().enumerate() {
        let _ = writeln!(output, "  {}. {} [{}]", i + 1, label, key);
    }

    let answer = match prompt_line(input, output, &format!("Choice [{}]: ", default)) {
        Some(answer) => answer,
        None => return default.to_string(),
    };

    if let Some((key, _)) = options.iter().find(|(key, _)| *key == answer) {
        return key.to_string();
    }
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .map(|(key, _)| key.to_string())
        .unwrap_or_else(|| {
            let _ = writeln!(output, "  [WARN] '{}' not recognised, keeping {}", answer, default);
            default.to_string()
        })
}

/// Prompt for the greenhouse shape by name or 1-based number.
fn prompt_shape<R: BufRead, W: Write>(input: &mut R, output: &mut W, default: Shape) -> Shape {
    let choices: Vec<String> = Shape::ALL
        .iter()
        .enumerate()
        .map(|(i, shape)| format!("{}. {}", i + 1, shape.display_name()))
        .collect();
    let text = format!("Shape ({}) [{}]: ", choices.join(", "), default.display_name());

    let answer = match prompt_line(input, output, &text) {
        Some(answer) => answer,
        None => return default,
    };

    let by_number = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Shape::ALL.get(i).copied());
    match by_number.or_else(|| Shape::from_str_flexible(&answer)) {
        Some(shape) => shape,
        None => {
            let _ = writeln!(output, "  [WARN] '{}' not recognised, keeping {}", answer, default);
            default
        }
    }
}

fn prompt_input<R: BufRead, W: Write>(input: &mut R, output: &mut W, catalog: &Catalog) -> HeatLossInput {
    let defaults = HeatLossInput::default();

    let shape = prompt_shape(input, output, defaults.shape);

    let d = defaults.dimensions;
    let dimensions = Dimensions::new(
        prompt_f64(input, output, "Length (ft)", d.length_ft),
        prompt_f64(input, output, "Width (ft)", d.width_ft),
        prompt_f64(input, output, "Height (ft)", d.height_ft),
        prompt_f64(input, output, "Door width (ft)", d.door_width_ft),
        prompt_f64(input, output, "Door height (ft)", d.door_height_ft),
    );

    let coverings = catalog.covering_options();
    let mut materials = defaults.materials.clone();
    materials.walls = prompt_key(input, output, "Wall material", &coverings, &materials.walls);
    materials.roof = prompt_key(input, output, "Roof material", &coverings, &materials.roof);
    materials.doors = prompt_key(input, output, "Door material", &coverings, &materials.doors);
    materials.frame = prompt_key(input, output, "Frame material", &catalog.frame_options(), &materials.frame);

    let insulation = prompt_key(
        input,
        output,
        "Insulation",
        &catalog.insulation_options(),
        &defaults.insulation,
    );

    let t = defaults.temperature;
    let temperature = Temperature::new(
        prompt_f64(input, output, "Desired temp (°F)", t.desired_f),
        prompt_f64(input, output, "Minimum temp (°F)", t.minimum_f),
    );

    HeatLossInput {
        shape,
        dimensions,
        materials,
        insulation,
        temperature,
    }
}

/// Format with comma thousands separators, e.g. 32122 -> "32,122"
fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn render_report(input: &HeatLossInput, result: &HeatLossResult) -> String {
    let mut lines = vec![
        "═══════════════════════════════════════".to_string(),
        "  GREENHOUSE HEAT LOSS".to_string(),
        "═══════════════════════════════════════".to_string(),
        String::new(),
        "Input:".to_string(),
        format!("  Shape:       {}", input.shape),
        format!(
            "  Size:        {} x {} x {} ft (door {} x {} ft)",
            input.dimensions.length_ft,
            input.dimensions.width_ft,
            input.dimensions.height_ft,
            input.dimensions.door_width_ft,
            input.dimensions.door_height_ft
        ),
        format!(
            "  Temps:       {} °F desired, {} °F minimum (ΔT = {} °F)",
            input.temperature.desired_f, input.temperature.minimum_f, result.temp_diff_f
        ),
        String::new(),
        "Areas:".to_string(),
        format!("  Walls: {:.1} sq ft (R-{})", result.areas.walls_sqft, result.wall_r_value),
        format!("  Roof:  {:.1} sq ft (R-{})", result.areas.roof_sqft, result.roof_r_value),
        format!("  Doors: {:.1} sq ft (R-{})", result.areas.doors_sqft, result.door_r_value),
    ];

    if result.areas.door_exceeds_walls {
        lines.push("  [WARN] Door area exceeds wall area; wall loss counted as zero".to_string());
    }

    lines.extend([
        String::new(),
        format!("Wall Heat Loss:  {} BTU/hr", with_thousands(result.walls_btu)),
        format!("Roof Heat Loss:  {} BTU/hr", with_thousands(result.roof_btu)),
        format!("Door Heat Loss:  {} BTU/hr", with_thousands(result.doors_btu)),
        String::new(),
        format!(
            "Frame factor {} and {:.0}% safety margin applied",
            result.thermal_bridge,
            (result.safety_factor - 1.0) * 100.0
        ),
    ]);

    if let Some(units) = result.insulation_units {
        lines.push(format!("Insulation units needed for walls: {}", with_thousands(units)));
    }

    lines.extend([
        "═══════════════════════════════════════".to_string(),
        format!("  Total Required: {} BTU/hr", with_thousands(result.total_btu)),
        "═══════════════════════════════════════".to_string(),
    ]);

    lines.join("\n")
}

fn print_catalog(catalog: &Catalog) {
    println!("Coverings:");
    for (key, label) in catalog.covering_options() {
        println!("  {:<18} {}", key, label);
    }
    println!("Frames:");
    for (key, frame) in &catalog.frames {
        println!("  {:<18} {} (thermal bridge {})", key, frame.label(), frame.thermal_bridge);
    }
    println!("Insulations:");
    for (key, label) in catalog.insulation_options() {
        println!("  {:<18} {}", key, label);
    }
}

/// Read a JSON configuration file. Read and parse failures carry a
/// `CalcError` so `main` can print its code.
fn load_input(path: &Path) -> Result<HeatLossInput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read input", path.display().to_string(), e.to_string()))
        .with_context(|| format!("reading input {}", path.display()))?;
    serde_json::from_str::<HeatLossInput>(&text)
        .map_err(CalcError::from)
        .with_context(|| format!("parsing input {}", path.display()))
}

fn run(options: &Options) -> Result<()> {
    let catalog = match &options.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin().clone(),
    };

    if options.list {
        print_catalog(&catalog);
        return Ok(());
    }

    let input = match &options.input {
        Some(path) => load_input(path)?,
        None => {
            println!("Greenhouse BTU Calculator");
            println!("=========================");
            println!();
            let stdin = io::stdin();
            let stdout = io::stdout();
            let input = prompt_input(&mut stdin.lock(), &mut stdout.lock(), &catalog);
            println!();
            input
        }
    };
    debug!("input: {:?}", input);

    let result = calculate(&input, &catalog)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_report(&input, &result));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = parse_args(&args).and_then(|options| {
        if options.help {
            println!("{}", USAGE);
            Ok(())
        } else {
            run(&options)
        }
    });

    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        if let Some(calc_error) = e.downcast_ref::<CalcError>() {
            eprintln!("Code: {}", calc_error.error_code());
            if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}
