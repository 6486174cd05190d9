use mine_escape::{CellFlags, Color, Grid, Outcome, RunDetails, cell_symbol};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(map_path: &str, details: &RunDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⛏  Mine: \"{}\"", map_path), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    match &details.outcome {
        Outcome::Success { path, final_gold } => {
            println!(
                "  {} {} cells, {}",
                palette.paint("✓ escaped:", ansi::GREEN),
                palette.bold(path.len().to_string()),
                palette.paint(format!("{final_gold}G"), ansi::YELLOW)
            );
        }
        Outcome::Failure { .. } => {
            println!("  {}", palette.paint("✗ no exit reachable", ansi::RED));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • Exit is walled or lava-locked off from the start");
            println!("  • A door on the only route has no matching key before it");
            println!("\n{}", palette.dim("  Tip: Set MINE_ESCAPE_DEBUG=1 to trace every step"));
        }
    }

    println!("\n{}", palette.paint("━━━ Ledger ━━━", ansi::GRAY));
    print_ledger(details, &palette);

    println!("\n{}", palette.paint("━━━ Walk ━━━", ansi::GRAY));
    print_metrics(details, &palette);

    println!("\n{}", palette.paint("━━━ Map ━━━", ansi::GRAY));
    print_overlay(&details.grid, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.metrics.total), ansi::GREEN));
    println!();
}

fn print_ledger(details: &RunDetails, palette: &ansi::Palette) {
    println!("  {} {}", palette.dim("gold:"), palette.paint(details.ledger.gold().to_string(), ansi::YELLOW));
    for color in Color::ALL {
        println!(
            "  {} {}",
            palette.dim(format!("{} keys:", color.name())),
            palette.paint(details.ledger.keys(color).to_string(), key_color(color))
        );
    }
}

fn print_metrics(details: &RunDetails, palette: &ansi::Palette) {
    let m = &details.metrics;
    let rows: [(&str, String); 10] = [
        ("steps", m.steps.to_string()),
        ("advances", m.advances.to_string()),
        ("backtracks", m.backtracks.to_string()),
        ("gold collected", m.gold_collected.to_string()),
        ("keys collected", m.keys_collected.to_string()),
        ("doors unlocked", m.doors_unlocked.to_string()),
        ("lava resets", format!("{} ({}G lost)", m.lava_resets, m.gold_lost)),
        ("max depth", m.max_depth.to_string()),
        ("peak capacity", m.peak_capacity.to_string()),
        ("live path", format!("{} cells", details.live_path.len())),
    ];
    for (label, value) in rows {
        println!("  {} {}", palette.dim(format!("{label:<15}")), palette.paint(value, ansi::BLUE));
    }
}

/// `*` live path, `o` backtracked, `S` start; everything else as in the map file.
fn print_overlay(grid: &Grid, palette: &ansi::Palette) {
    for row in grid.cells().chunks(grid.cols()) {
        let line: String = row
            .iter()
            .map(|cell| {
                if cell.flags.contains(CellFlags::IN_PATH) {
                    palette.paint("*", ansi::GREEN)
                } else if cell.flags.contains(CellFlags::RETIRED) {
                    palette.paint("o", ansi::GRAY)
                } else if cell.flags.contains(CellFlags::START) {
                    palette.bold("S")
                } else {
                    cell_symbol(cell.category).to_string()
                }
            })
            .collect();
        println!("  {line}");
    }
}

fn key_color(color: Color) -> &'static str {
    match color {
        Color::Red => ansi::RED,
        Color::Green => ansi::GREEN,
        Color::Blue => ansi::BLUE,
    }
}
