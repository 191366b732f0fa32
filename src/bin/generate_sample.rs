//! Writes the four demo workbooks into `data/` so the dashboard has
//! something to show out of the box:
//!
//! ```text
//! cargo run --bin generate_sample
//! cargo run
//! ```
//!
//! Headers are deliberately messy (mixed case, spaces, hyphens) to mirror
//! real upstream exports.

use rust_xlsxwriter::Workbook;

/// Minimal deterministic PRNG (64-bit LCG), enough for demo variation.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 11
    }

    /// Uniform float in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() % 1_000_000) as f64 / 1_000_000.0;
        lo + unit * (hi - lo)
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() as usize) % options.len()]
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = std::path::Path::new("data");
    std::fs::create_dir_all(data_dir)?;
    let mut rng = SimpleRng::new(42);

    // ---- Sales_Analysis_Results (6).xlsx ----
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Month")?;
    sheet.write_string(0, 1, "total-sales")?;
    sheet.write_string(0, 2, "Units Sold")?;
    sheet.write_string(0, 3, " Avg Order Value ")?;
    let months = [
        "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06", "2025-07", "2025-08",
        "2025-09", "2025-10", "2025-11", "2025-12",
    ];
    for (i, month) in months.iter().enumerate() {
        let row = (i + 1) as u32;
        let units = rng.range(120.0, 480.0).round();
        let aov = rng.range(40.0, 95.0);
        sheet.write_string(row, 0, *month)?;
        sheet.write_number(row, 1, (units * aov).round())?;
        sheet.write_number(row, 2, units)?;
        sheet.write_number(row, 3, (aov * 100.0).round() / 100.0)?;
    }
    workbook.save(data_dir.join("Sales_Analysis_Results (6).xlsx"))?;

    // ---- SKU_Analysis (3).xlsx ----
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "SKU")?;
    sheet.write_string(0, 1, "Product Name")?;
    sheet.write_string(0, 2, "units-sold")?;
    sheet.write_string(0, 3, "Revenue")?;
    let products = ["Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey"];
    for i in 0..20u32 {
        let row = i + 1;
        let units = rng.range(5.0, 300.0).round();
        sheet.write_string(row, 0, format!("SKU-{:04}", 1000 + i * 7))?;
        sheet.write_string(row, 1, format!("{} {}", rng.pick(&products), i + 1))?;
        sheet.write_number(row, 2, units)?;
        sheet.write_number(row, 3, (units * rng.range(8.0, 60.0)).round())?;
    }
    workbook.save(data_dir.join("SKU_Analysis (3).xlsx"))?;

    // ---- Client_Status_Analysis.xlsx ----
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Client")?;
    sheet.write_string(0, 1, "Client Status")?;
    sheet.write_string(0, 2, "total-sales")?;
    let statuses = ["active", "at risk", "churned", "new"];
    for i in 0..30u32 {
        let row = i + 1;
        sheet.write_string(row, 0, format!("Client {:02}", i + 1))?;
        sheet.write_string(row, 1, rng.pick(&statuses))?;
        sheet.write_number(row, 2, rng.range(500.0, 25_000.0).round())?;
    }
    workbook.save(data_dir.join("Client_Status_Analysis.xlsx"))?;

    // ---- Advanced_Sales_Insights.xlsx ----
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Insight")?;
    sheet.write_string(0, 1, "Segment")?;
    sheet.write_string(0, 2, "Impact Score")?;
    let segments = ["enterprise", "mid-market", "smb"];
    let insights = [
        "Upsell opportunity",
        "Seasonal dip expected",
        "High churn risk cohort",
        "Pricing pressure",
        "Cross-sell candidate",
        "Expansion ready",
    ];
    for (i, insight) in insights.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, *insight)?;
        sheet.write_string(row, 1, rng.pick(&segments))?;
        sheet.write_number(row, 2, (rng.range(0.0, 1.0) * 100.0).round() / 100.0)?;
    }
    workbook.save(data_dir.join("Advanced_Sales_Insights.xlsx"))?;

    println!("Wrote 4 sample workbooks to {}", data_dir.display());
    Ok(())
}
