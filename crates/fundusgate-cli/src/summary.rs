use console::Style;
use fundusgate_core::{MetricSet, Verdict};

pub struct Styles {
    pub accepted: Style,
    pub rejected: Style,
    pub label: Style,
    pub value: Style,
    pub path: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            accepted: Style::new().green().bold(),
            rejected: Style::new().red().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

/// Print one verdict line: status marker, file name, message.
pub fn print_verdict_line(styles: &Styles, name: &str, verdict: &Verdict) {
    let (marker, style) = if verdict.is_accepted() {
        ("PASS", &styles.accepted)
    } else {
        ("FAIL", &styles.rejected)
    };
    println!(
        "  {}  {:<40}  {}",
        style.apply_to(marker),
        styles.path.apply_to(name),
        verdict.message()
    );
}

/// Print the diagnostic metric table for an accepted image.
pub fn print_metrics(styles: &Styles, metrics: &MetricSet) {
    for (name, value) in metrics.iter() {
        println!(
            "        {:<22}{}",
            styles.label.apply_to(name),
            styles.value.apply_to(format!("{value:.6}"))
        );
    }
}
