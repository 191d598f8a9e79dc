use anyhow::{bail, Result};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{DisasterCategory, PredictionResult, RiskLevel};
use crate::tables::hotspots::{self, Hotspot};
use crate::tables::knowledge::{DisasterArticle, FaqEntry};
use crate::tables::{locations, RiskTables};

const BAR_WIDTH: usize = 30;

fn banner() -> String {
    format!("\n {} v{}\n", "disaster-risk".bold(), env!("CARGO_PKG_VERSION"))
}

fn header(quiet: bool) {
    if !quiet {
        println!("{}", banner());
    }
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
        RiskLevel::Extreme => Color::Magenta,
    }
}

fn colored_level(level: RiskLevel) -> ColoredString {
    let label = format!("{level} Risk");
    let colored = match level {
        RiskLevel::Low => label.green(),
        RiskLevel::Moderate => label.yellow(),
        RiskLevel::High => label.red(),
        RiskLevel::Extreme => label.magenta(),
    };
    colored.bold()
}

/// Horizontal gauge for a 0-100 percentage.
fn bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Render a single prediction: score box, gauge and recommendations.
pub fn render_prediction(result: &PredictionResult, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!(
            "{} {}: {}% {}",
            result.category, result.location, result.risk_score, result.risk_level
        );
        return Ok(());
    }

    header(quiet);
    println!(
        " Risk Assessment for {} ({})\n",
        result.location.to_string().bold(),
        result.category
    );

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(
        " │  {:<48} │",
        format!("Risk Score : {:>3}%", result.risk_score)
    );
    println!(" │  {:<48} │", format!("Level      : {}", result.risk_level));
    println!(" │  {:<48} │", bar(result.risk_score));
    if verbose {
        println!(" │  {:<48} │", format!("Source     : {}", result.source));
    }
    println!(" └────────────────────────────────────────────────────┘");
    println!(" {}\n", colored_level(result.risk_level));

    println!(" {} Recommendations:\n", "[!]".cyan().bold());
    for rec in &result.recommendations {
        println!("   {} {}", "✓".green(), rec);
    }
    println!();

    Ok(())
}

/// Render several predictions as one table plus a per-level count line.
pub fn render_batch(results: &[PredictionResult], verbose: bool, quiet: bool) -> Result<()> {
    let count = |level: RiskLevel| results.iter().filter(|r| r.risk_level == level).count();

    if quiet {
        println!(
            "Total: {}  Low: {}  Moderate: {}  High: {}  Extreme: {}",
            results.len(),
            count(RiskLevel::Low).to_string().green(),
            count(RiskLevel::Moderate).to_string().yellow(),
            count(RiskLevel::High).to_string().red(),
            count(RiskLevel::Extreme).to_string().magenta(),
        );
        return Ok(());
    }

    header(quiet);

    let mut table = Table::new();
    let mut columns = vec!["Type", "Location", "Score", "Level"];
    if verbose {
        columns.push("Source");
    }
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            columns
                .into_iter()
                .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
        );

    for r in results {
        let mut row = vec![
            Cell::new(r.category.to_string()),
            Cell::new(r.location.to_string()),
            Cell::new(format!("{}%", r.risk_score)).set_alignment(CellAlignment::Right),
            Cell::new(r.risk_level.to_string()).fg(level_color(r.risk_level)),
        ];
        if verbose {
            row.push(Cell::new(r.source.to_string()));
        }
        table.add_row(row);
    }

    println!("{}", table);
    println!(
        "\n Total: {}  Low: {}  Moderate: {}  High: {}  Extreme: {}\n",
        results.len(),
        count(RiskLevel::Low),
        count(RiskLevel::Moderate),
        count(RiskLevel::High),
        count(RiskLevel::Extreme),
    );

    Ok(())
}

/// Render the ranked hotspot list of one category.
pub fn render_hotspots(category: DisasterCategory, spots: &[&Hotspot], quiet: bool) -> Result<()> {
    if quiet {
        let names: Vec<String> = spots.iter().map(|s| format!("{} ({}%)", s.name, s.risk)).collect();
        println!("{}: {}", category, names.join(", "));
        return Ok(());
    }

    println!(" {} High-risk regions for {}\n", "▶".cyan(), category.to_string().bold());

    if spots.is_empty() {
        println!("   No mapped regions for this disaster type.\n");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Region").add_attribute(Attribute::Bold),
            Cell::new("Coordinates").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("").add_attribute(Attribute::Bold),
        ]);

    for s in spots {
        let level = crate::assessor::classify(f64::from(s.risk) / 100.0);
        table.add_row(vec![
            Cell::new(s.name),
            // latitude first, as shown on the map tooltip
            Cell::new(format!("{:.2}, {:.2}", s.latitude, s.longitude)),
            Cell::new(format!("{}%", s.risk)).set_alignment(CellAlignment::Right),
            Cell::new(bar(s.risk)).fg(level_color(level)),
        ]);
    }

    println!("{}\n", table);
    Ok(())
}

/// Banner once, then one ranked table per category.
pub fn render_hotspot_listing(categories: &[DisasterCategory], quiet: bool) -> Result<()> {
    header(quiet);
    for category in categories {
        render_hotspots(*category, &hotspots::ranked(*category), quiet)?;
    }
    Ok(())
}

fn bullet_section(title: &str, items: &[&str]) {
    println!("   {}", title.bold());
    for item in items {
        println!("     • {}", item);
    }
    println!();
}

/// Render one knowledge-base article. Verbose output adds the curated scores.
pub fn render_article(article: &DisasterArticle, tables: &RiskTables, verbose: bool) -> Result<()> {
    println!(" {}\n", article.title.bold().underline());
    println!("   {}\n", article.description);
    bullet_section("Causes", article.causes);
    bullet_section("Effects", article.effects);
    bullet_section("Preparation", article.preparation);
    bullet_section("High-Risk Areas", article.high_risk_areas);
    println!("   {}", "About the risk".bold());
    println!("     {}\n", article.risk_factors);

    if verbose {
        let entries = tables.entries(article.category);
        if !entries.is_empty() {
            println!("   {}", "Curated region scores".bold());
            for (region, score) in entries {
                println!("     {:<20} {:>3.0}%", region, score * 100.0);
            }
            println!();
        }
    }

    Ok(())
}

pub fn render_faq(entries: &[FaqEntry], quiet: bool) -> Result<()> {
    header(quiet);
    for (i, entry) in entries.iter().enumerate() {
        println!(" {} {}", format!("Q{}.", i + 1).cyan().bold(), entry.question.bold());
        if quiet {
            continue;
        }
        println!("   {}", entry.answer);
        for point in entry.points {
            println!("     • {}", point);
        }
        if let Some(note) = entry.note {
            println!("   {}", note);
        }
        println!();
    }
    Ok(())
}

/// List every country with its regions, or the regions of one country.
pub fn render_locations(country: Option<&str>) -> Result<()> {
    match country {
        Some(country) => {
            let Some(regions) = locations::regions(country) else {
                bail!("unknown country `{country}`; run `disaster-risk locations` for the list");
            };
            for region in regions {
                println!("{}", region);
            }
        }
        None => {
            for country in locations::countries() {
                let regions = locations::regions(country).unwrap_or_default();
                println!("{} {}", format!("{country}:").bold(), regions.join(", "));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar(0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(100).chars().count(), BAR_WIDTH);
        assert_eq!(bar(100).chars().filter(|&c| c == '█').count(), BAR_WIDTH);
        assert_eq!(bar(50).chars().filter(|&c| c == '█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn test_banner_names_tool_and_version() {
        let text = banner();
        assert!(text.contains("disaster-risk"));
        assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn test_hotspot_listing_renders_every_category() {
        assert!(render_hotspot_listing(&DisasterCategory::ALL, false).is_ok());
        assert!(render_hotspot_listing(&DisasterCategory::ALL, true).is_ok());
        assert!(render_hotspot_listing(&[], false).is_ok());
    }

    #[test]
    fn test_unknown_country_is_an_error() {
        assert!(render_locations(Some("Atlantis")).is_err());
        assert!(render_locations(Some("Japan")).is_ok());
    }
}
