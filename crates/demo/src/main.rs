// File: crates/demo/src/main.rs
// Summary: Demo loads a rating history CSV (or synthesizes a season) and renders it to SVG.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use skillplot::sample::{OutcomeMarker, SkillSample};
use skillplot::{ChartSurface, RenderOptions};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let (history, wins, losses) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            let history = load_history_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} samples", history.len());
            (history, Vec::new(), Vec::new())
        }
        None => sample_season()?,
    };

    if history.is_empty() {
        anyhow::bail!("no samples loaded; check headers/delimiter.");
    }

    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "light".to_string());
    let mut surface = ChartSurface::new(skillplot::theme::find(&theme_name));

    let opts = RenderOptions::default();
    let rendered = surface.render(&history, &wins, &losses, &opts)?;
    println!(
        "Rendered {} glyphs over {} .. {}",
        rendered.glyphs.len(),
        rendered.time_domain.start.format("%Y-%m-%d"),
        rendered.time_domain.end.format("%Y-%m-%d"),
    );

    let out = out_path();
    std::fs::write(&out, &rendered.svg)?;
    println!("Wrote {}", out.display());

    // Exercise the hover dispatch: probe the first glyph's position.
    let probe = rendered.glyphs.first().map(|g| {
        (
            g.x + opts.insets.left as f32,
            g.y + opts.insets.top as f32,
        )
    });
    if let Some((x, y)) = probe {
        surface.pointer_moved(x, y);
        if let Some(tip) = surface.tooltip() {
            println!("Tooltip at ({:.0},{:.0}): {}", tip.x, tip.y, tip.text.replace('\n', " | "));
        }
        surface.pointer_left();
    }

    Ok(())
}

fn out_path() -> PathBuf {
    let dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&dir).ok();
    dir.join("rating_history.svg")
}

/// A deterministic built-in season used when no CSV is given.
fn sample_season() -> Result<(Vec<SkillSample>, Vec<OutcomeMarker>, Vec<OutcomeMarker>)> {
    let start = Utc.with_ymd_and_hms(2022, 9, 1, 0, 0, 0).unwrap();
    let opponents = ["Alice", "Bob", "Carol", "Dave", "Eve"];
    let mut history = Vec::new();
    let mut wins = Vec::new();
    let mut losses = Vec::new();
    let mut mean = 25.0;
    for week in 0..26i64 {
        let at = start + Duration::weeks(week);
        let swing = (week as f64 * 0.7).sin();
        mean += swing * 0.6;
        let sigma = 2.8 - (week as f64 * 0.07).min(1.8);
        history.push(SkillSample::try_new(at, mean, mean - 3.0 * sigma, mean + 3.0 * sigma)?);
        let opponent = opponents[week as usize % opponents.len()];
        let match_at = at + Duration::days(3);
        if swing >= 0.0 {
            wins.push(OutcomeMarker::new(match_at, mean + 0.8, opponent));
        } else {
            losses.push(OutcomeMarker::new(match_at, mean - 0.8, opponent));
        }
    }
    Ok((history, wins, losses))
}

/// Load a rating history CSV with date/mean/lower/upper columns.
fn load_history_csv(path: &Path) -> Result<Vec<SkillSample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_date = idx(&["date", "time", "timestamp", "datetime"])
        .context("no date column found")?;
    let i_mean = idx(&["mean", "rating", "mu"]).context("no rating column found")?;
    let i_lower = idx(&["lower", "low", "lower_bound"]).context("no lower column found")?;
    let i_upper = idx(&["upper", "high", "upper_bound"]).context("no upper column found")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim).unwrap_or("");
        let Some(at) = parse_date(field(i_date)) else { continue };
        let parse = |i: usize| field(i).parse::<f64>().ok();
        if let (Some(mean), Some(lower), Some(upper)) =
            (parse(i_mean), parse(i_lower), parse(i_upper))
        {
            out.push(SkillSample::try_new(at, mean, lower, upper)?);
        }
    }
    out.sort_by_key(|s| s.at);
    Ok(out)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        let ms = if n > 10_i64.pow(12) { n } else { n * 1000 };
        return Utc.timestamp_millis_opt(ms).single();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}
