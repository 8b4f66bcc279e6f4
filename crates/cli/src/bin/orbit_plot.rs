use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render orbit paths from a trajectory CSV to a PNG"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/orbits.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Overlay the moon's planet-relative rosette, centred on the final
    /// planet position
    #[arg(long)]
    rosette: bool,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    star: (f64, f64),
    planet: (f64, f64),
    moon: (f64, f64),
}

const BACKGROUND: RGBColor = RGBColor(6, 6, 6);
const AXIS_COLOR: RGBColor = RGBColor(68, 68, 68);
const TEXT_COLOR: RGBColor = RGBColor(240, 240, 240);
const STAR_COLOR: RGBColor = RGBColor(255, 165, 0);
const PLANET_COLOR: RGBColor = RGBColor(64, 128, 255);
const MOON_COLOR: RGBColor = RGBColor(221, 221, 221);
const TRAIL_COLOR: RGBColor = RGBColor(170, 170, 170);
const ROSETTE_COLOR: RGBColor = RGBColor(238, 130, 238);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let samples = read_samples(&cli.input)?;
    if samples.is_empty() {
        return Err(anyhow::anyhow!("No samples in the provided CSV"));
    }

    let margin = 0.2;
    let extent = samples
        .iter()
        .flat_map(|s| {
            [
                s.planet.0.abs(),
                s.planet.1.abs(),
                s.moon.0.abs(),
                s.moon.1.abs(),
            ]
        })
        .fold(0.0f64, f64::max)
        + margin;

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 18.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            "Red Dwarf Planetary System",
            caption_font.color(&TEXT_COLOR),
        )
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .axis_style(&AXIS_COLOR)
        .x_desc("X [arb. units]")
        .y_desc("Y [arb. units]")
        .label_style(label_font.clone().color(&TEXT_COLOR))
        .x_labels(6)
        .y_labels(6)
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| s.planet),
        PLANET_COLOR.stroke_width(1),
    ))?;
    chart.draw_series(LineSeries::new(
        samples.iter().map(|s| s.moon),
        TRAIL_COLOR.mix(0.7).stroke_width(1),
    ))?;

    if cli.rosette {
        let centre = samples.last().map(|s| s.planet).unwrap_or((0.0, 0.0));
        chart.draw_series(LineSeries::new(
            samples.iter().map(|s| {
                (
                    centre.0 + (s.moon.0 - s.planet.0),
                    centre.1 + (s.moon.1 - s.planet.1),
                )
            }),
            ROSETTE_COLOR.mix(0.6).stroke_width(1),
        ))?;
    }

    let star = samples[0].star;
    chart.draw_series(std::iter::once(Circle::new(
        star,
        8,
        STAR_COLOR.filled(),
    )))?;
    if let Some(last) = samples.last() {
        chart.draw_series(std::iter::once(Circle::new(
            last.planet,
            6,
            PLANET_COLOR.filled(),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(
            last.moon,
            3,
            MOON_COLOR.filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_samples(path: &str) -> anyhow::Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> anyhow::Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow::anyhow!("CSV is missing the '{}' column", name))
    };
    let star_x = column("star_x")?;
    let star_y = column("star_y")?;
    let planet_x = column("planet_x")?;
    let planet_y = column("planet_y")?;
    let moon_x = column("moon_x")?;
    let moon_y = column("moon_y")?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| -> anyhow::Result<f64> {
            record
                .get(idx)
                .ok_or_else(|| anyhow::anyhow!("CSV row is missing a field"))?
                .parse::<f64>()
                .map_err(|err| anyhow::anyhow!("CSV field is not numeric: {err}"))
        };
        samples.push(Sample {
            star: (field(star_x)?, field(star_y)?),
            planet: (field(planet_x)?, field(planet_y)?),
            moon: (field(moon_x)?, field(moon_y)?),
        });
    }
    Ok(samples)
}
